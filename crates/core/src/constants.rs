/// File name offered by the monthly report download
pub const REPORT_CSV_FILENAME: &str = "monthly_report.csv";

/// Header row of the monthly report CSV
pub const REPORT_CSV_HEADER: [&str; 3] = ["Category", "Amount", "Date"];

/// Largest amount accepted for a budget or an expense, in whole currency units
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// Decimal places accepted for a budget or an expense amount
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Date format used for stored expense dates and CSV output
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Month name format used as the budget key (e.g. "October")
pub const MONTH_NAME_FORMAT: &str = "%B";

pub const MSG_ACCOUNT_CREATED: &str = "Account created successfully!";
pub const MSG_EMAIL_TAKEN: &str = "An account with this email already exists.";
pub const MSG_LOGIN_FAILED: &str = "Login Unsuccessful. Please check email and password";
pub const MSG_LOGIN_REQUIRED: &str = "Please log in to access this page.";
pub const MSG_BUDGET_ADDED: &str = "Monthly budget added!";
pub const MSG_BUDGET_UPDATED: &str = "Monthly budget updated!";
pub const MSG_BUDGET_EXISTS: &str =
    "You have already set a budget for this month. You can only update it.";
pub const MSG_BUDGET_MISSING: &str =
    "No monthly budget set for the current month. Please add a budget first.";
pub const MSG_EXPENSE_ADDED: &str = "Expense added!";
