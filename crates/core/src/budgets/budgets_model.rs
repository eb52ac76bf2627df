//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's spending ceiling for one named month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    /// English month name, e.g. "October".
    pub month: String,
    pub amount: Decimal,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub month: String,
    pub amount: Decimal,
    pub user_id: String,
}

/// Raw add/update budget form. The amount is parsed by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetForm {
    #[serde(default)]
    pub amount: String,
}

/// Result of looking up the budget the update form should edit.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetLookup {
    Found(Budget),
    /// No budget for the current month; carries the redirect to the add flow.
    Missing(crate::outcome::ActionOutcome),
}
