use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::expenses_model::ExpenseForm;
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::constants::MSG_EXPENSE_ADDED;
use crate::errors::Result;
use crate::outcome::{reject_invalid, ActionOutcome, Destination, Flash};
use crate::users::SessionUser;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn add_expense(&self, user: &SessionUser, form: ExpenseForm) -> Result<ActionOutcome> {
        let new_expense = match form.into_new_expense(&user.id) {
            Ok(new_expense) => new_expense,
            Err(err) => return reject_invalid(Destination::AddExpense, err),
        };

        let expense = self.repository.create(new_expense).await?;
        info!(
            "Recorded expense {} ({}) on {}",
            expense.id, expense.category, expense.date
        );

        Ok(ActionOutcome::new(
            Destination::Dashboard,
            Flash::success(MSG_EXPENSE_ADDED),
        ))
    }
}
