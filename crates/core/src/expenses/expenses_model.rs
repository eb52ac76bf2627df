//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::{parse_amount, parse_date, require_field};

/// A single immutable spend record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

/// Input model for recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub user_id: String,
}

/// Raw add-expense form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
}

impl ExpenseForm {
    /// Validates every field and builds the record to insert for `user_id`.
    pub fn into_new_expense(self, user_id: &str) -> Result<NewExpense> {
        let category = require_field("category", &self.category)?.to_string();
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        Ok(NewExpense {
            id: None,
            category,
            amount,
            date,
            user_id: user_id.to_string(),
        })
    }
}

/// Sums expense amounts. Fails instead of wrapping when the total leaves the
/// `Decimal` range.
pub fn total_amount<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Result<Decimal> {
    expenses.into_iter().try_fold(Decimal::ZERO, |total, expense| {
        total.checked_add(expense.amount).ok_or_else(|| {
            Error::Calculation(format!(
                "Expense total overflowed after adding expense {}",
                expense.id
            ))
        })
    })
}
