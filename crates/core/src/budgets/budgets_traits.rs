use async_trait::async_trait;
use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetForm, BudgetLookup, NewBudget};
use crate::errors::Result;
use crate::outcome::ActionOutcome;
use crate::users::SessionUser;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>>;

    /// Finds the user's budget for a month name. Matching ignores ASCII case.
    fn find_for_month(&self, user_id: &str, month: &str) -> Result<Option<Budget>>;

    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;

    async fn update_amount(&self, budget_id: &str, amount: Decimal) -> Result<Budget>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_current_budget(&self, user: &SessionUser) -> Result<Option<Budget>>;

    /// Budget for the update form, or the redirect to the add flow.
    fn budget_for_update(&self, user: &SessionUser) -> Result<BudgetLookup>;

    async fn add_budget(&self, user: &SessionUser, form: BudgetForm) -> Result<ActionOutcome>;

    async fn update_budget(&self, user: &SessionUser, form: BudgetForm)
        -> Result<ActionOutcome>;
}
