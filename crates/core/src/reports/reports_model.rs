//! Dashboard and monthly report view models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::budgets::Budget;
use crate::expenses::Expense;

/// Everything the dashboard shows.
///
/// `lifetime_total` sums every expense the user ever recorded, while the
/// budget is the current month's. The monthly report uses `monthly_total`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub month: String,
    pub all_budgets: Vec<Budget>,
    pub monthly_budget: Option<Budget>,
    pub expenses: Vec<Expense>,
    pub lifetime_total: Decimal,
    /// Current-month budget minus `lifetime_total`, or zero without a budget.
    pub remaining_budget: Decimal,
}

/// Expenses of the current calendar month against that month's budget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    pub year: i32,
    pub expenses: Vec<Expense>,
    pub monthly_total: Decimal,
    pub total_budget: Decimal,
    pub remaining_balance: Decimal,
    pub generated_at: NaiveDateTime,
}

/// A rendered CSV download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    /// Data rows, header excluded.
    pub row_count: usize,
}
