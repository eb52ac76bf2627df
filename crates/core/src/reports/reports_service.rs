use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::csv_export::write_expenses_csv;
use super::reports_model::{CsvExport, Dashboard, MonthlyReport};
use crate::budgets::BudgetRepositoryTrait;
use crate::constants::REPORT_CSV_FILENAME;
use crate::errors::{Error, Result};
use crate::expenses::{total_amount, Expense, ExpenseRepositoryTrait};
use crate::users::SessionUser;
use crate::utils::{Clock, ReportPeriod};

fn remaining(budget: Decimal, spent: Decimal) -> Result<Decimal> {
    budget.checked_sub(spent).ok_or_else(|| {
        Error::Calculation(format!(
            "Remaining balance out of range (budget {}, spent {})",
            budget, spent
        ))
    })
}

/// Trait for the read-only aggregate views.
pub trait ReportServiceTrait: Send + Sync {
    fn get_dashboard(&self, user: &SessionUser) -> Result<Dashboard>;

    fn get_monthly_report(&self, user: &SessionUser) -> Result<MonthlyReport>;

    fn export_monthly_csv(&self, user: &SessionUser) -> Result<CsvExport>;
}

pub struct ReportService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            budget_repository,
            expense_repository,
            clock,
        }
    }

    fn monthly_expenses(&self, user: &SessionUser, period: ReportPeriod) -> Result<Vec<Expense>> {
        self.expense_repository.list_for_user_between(
            &user.id,
            period.first_day(),
            period.next_first_day(),
        )
    }
}

impl ReportServiceTrait for ReportService {
    fn get_dashboard(&self, user: &SessionUser) -> Result<Dashboard> {
        let month = ReportPeriod::current(self.clock.as_ref()).month_name();

        let all_budgets = self.budget_repository.list_for_user(&user.id)?;
        for budget in &all_budgets {
            debug!(
                "User {} budget: month={}, amount={}",
                user.id, budget.month, budget.amount
            );
        }

        let monthly_budget = self.budget_repository.find_for_month(&user.id, &month)?;
        let expenses = self.expense_repository.list_for_user(&user.id)?;
        let lifetime_total = total_amount(&expenses)?;
        let remaining_budget = match &monthly_budget {
            Some(budget) => remaining(budget.amount, lifetime_total)?,
            None => Decimal::ZERO,
        };

        Ok(Dashboard {
            month,
            all_budgets,
            monthly_budget,
            expenses,
            lifetime_total,
            remaining_budget,
        })
    }

    fn get_monthly_report(&self, user: &SessionUser) -> Result<MonthlyReport> {
        let generated_at = self.clock.now();
        let period = ReportPeriod::containing(generated_at.date());
        let month = period.month_name();

        let expenses = self.monthly_expenses(user, period)?;
        let monthly_total = total_amount(&expenses)?;
        let total_budget = self
            .budget_repository
            .find_for_month(&user.id, &month)?
            .map(|budget| budget.amount)
            .unwrap_or(Decimal::ZERO);
        debug!(
            "Monthly report for {} {}: budget={}, spent={}",
            month, period.year, total_budget, monthly_total
        );

        let remaining_balance = remaining(total_budget, monthly_total)?;

        Ok(MonthlyReport {
            month,
            year: period.year,
            expenses,
            monthly_total,
            total_budget,
            remaining_balance,
            generated_at,
        })
    }

    fn export_monthly_csv(&self, user: &SessionUser) -> Result<CsvExport> {
        let period = ReportPeriod::current(self.clock.as_ref());
        let expenses = self.monthly_expenses(user, period)?;
        let content = write_expenses_csv(&expenses)?;

        Ok(CsvExport {
            filename: REPORT_CSV_FILENAME.to_string(),
            content,
            row_count: expenses.len(),
        })
    }
}
