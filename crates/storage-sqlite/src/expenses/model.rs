//! Database models for expenses.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::{date_from_text, date_to_text, decimal_from_text};
use budgetbook_core::expenses::{Expense, NewExpense};

/// Database model for expenses.
///
/// Amounts are decimal text and dates ISO `YYYY-MM-DD` text, so string
/// comparison on `date` orders chronologically.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub id: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            amount: decimal_from_text(&db.amount, "expense amount"),
            date: date_from_text(&db.date, "expense date"),
            id: db.id,
            category: db.category,
            user_id: db.user_id,
            created_at: db.created_at,
        }
    }
}

impl NewExpenseDB {
    pub fn from_domain(domain: NewExpense, id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            category: domain.category,
            amount: domain.amount.to_string(),
            date: date_to_text(domain.date),
            user_id: domain.user_id,
            created_at,
        }
    }
}
