//! Database models for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::decimal_from_text;
use budgetbook_core::budgets::{Budget, NewBudget};

/// Database model for budgets. The amount is stored as decimal text.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub month: String,
    pub amount: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new budget
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct NewBudgetDB {
    pub id: String,
    pub month: String,
    pub amount: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            amount: decimal_from_text(&db.amount, "budget amount"),
            id: db.id,
            month: db.month,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewBudgetDB {
    pub fn from_domain(domain: NewBudget, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            month: domain.month,
            amount: domain.amount.to_string(),
            user_id: domain.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
