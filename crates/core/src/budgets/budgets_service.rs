use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetForm, BudgetLookup, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::{
    MSG_BUDGET_ADDED, MSG_BUDGET_EXISTS, MSG_BUDGET_MISSING, MSG_BUDGET_UPDATED,
};
use crate::errors::Result;
use crate::outcome::{reject_invalid, ActionOutcome, Destination, Flash};
use crate::users::SessionUser;
use crate::utils::{parse_amount, Clock, ReportPeriod};

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    fn current_month(&self) -> String {
        ReportPeriod::current(self.clock.as_ref()).month_name()
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_current_budget(&self, user: &SessionUser) -> Result<Option<Budget>> {
        self.repository
            .find_for_month(&user.id, &self.current_month())
    }

    fn budget_for_update(&self, user: &SessionUser) -> Result<BudgetLookup> {
        Ok(match self.get_current_budget(user)? {
            Some(budget) => BudgetLookup::Found(budget),
            None => BudgetLookup::Missing(ActionOutcome::new(
                Destination::AddBudget,
                Flash::danger(MSG_BUDGET_MISSING),
            )),
        })
    }

    /// Creates the current month's budget unless one already exists.
    ///
    /// The existence check and the insert are separate store calls, so two
    /// concurrent submissions from the same user can both succeed.
    async fn add_budget(&self, user: &SessionUser, form: BudgetForm) -> Result<ActionOutcome> {
        let month = self.current_month();

        if self.repository.find_for_month(&user.id, &month)?.is_some() {
            debug!("User {} already has a budget for {}", user.id, month);
            return Ok(ActionOutcome::new(
                Destination::UpdateBudget,
                Flash::danger(MSG_BUDGET_EXISTS),
            ));
        }

        let amount = match parse_amount(&form.amount) {
            Ok(amount) => amount,
            Err(err) => return reject_invalid(Destination::AddBudget, err),
        };

        let budget = self
            .repository
            .create(NewBudget {
                id: None,
                month,
                amount,
                user_id: user.id.clone(),
            })
            .await?;
        info!("Created budget {} for {}", budget.id, budget.month);

        Ok(ActionOutcome::new(
            Destination::Dashboard,
            Flash::success(MSG_BUDGET_ADDED),
        ))
    }

    async fn update_budget(
        &self,
        user: &SessionUser,
        form: BudgetForm,
    ) -> Result<ActionOutcome> {
        let budget = match self.budget_for_update(user)? {
            BudgetLookup::Found(budget) => budget,
            BudgetLookup::Missing(outcome) => return Ok(outcome),
        };

        let amount = match parse_amount(&form.amount) {
            Ok(amount) => amount,
            Err(err) => return reject_invalid(Destination::UpdateBudget, err),
        };

        self.repository.update_amount(&budget.id, amount).await?;
        info!("Updated budget {} to {}", budget.id, amount);

        Ok(ActionOutcome::new(
            Destination::Dashboard,
            Flash::success(MSG_BUDGET_UPDATED),
        ))
    }
}
