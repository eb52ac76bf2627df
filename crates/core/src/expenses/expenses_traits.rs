use async_trait::async_trait;
use chrono::NaiveDate;

use super::expenses_model::{Expense, ExpenseForm, NewExpense};
use crate::errors::Result;
use crate::outcome::ActionOutcome;
use crate::users::SessionUser;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn create(&self, new_expense: NewExpense) -> Result<Expense>;

    /// Every expense the user ever recorded, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Expense>>;

    /// Expenses dated in `[start, end)`, oldest first.
    fn list_for_user_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn add_expense(&self, user: &SessionUser, form: ExpenseForm) -> Result<ActionOutcome>;
}
