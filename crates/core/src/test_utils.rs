//! In-memory repositories shared by the service tests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::sync::Mutex;

use crate::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use crate::users::SessionUser;

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn session_user(id: &str) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        username: format!("{id}-name"),
    }
}

#[derive(Default)]
pub struct MockBudgetRepository {
    pub budgets: Mutex<Vec<Budget>>,
}

impl MockBudgetRepository {
    pub fn seed(&self, user_id: &str, month: &str, amount: Decimal) {
        let mut budgets = self.budgets.lock().unwrap();
        let id = format!("budget-{}", budgets.len() + 1);
        budgets.push(Budget {
            id,
            month: month.to_string(),
            amount,
            user_id: user_id.to_string(),
            created_at: timestamp(),
            updated_at: timestamp(),
        });
    }

    pub fn count_for(&self, user_id: &str) -> usize {
        self.budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .count()
    }
}

#[async_trait]
impl BudgetRepositoryTrait for MockBudgetRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_for_month(&self, user_id: &str, month: &str) -> Result<Option<Budget>> {
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id && b.month.eq_ignore_ascii_case(month))
            .cloned())
    }

    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        self.seed(&new_budget.user_id, &new_budget.month, new_budget.amount);
        Ok(self.budgets.lock().unwrap().last().cloned().unwrap())
    }

    async fn update_amount(&self, budget_id: &str, amount: Decimal) -> Result<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let budget = budgets
            .iter_mut()
            .find(|b| b.id == budget_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(budget_id.to_string())))?;
        budget.amount = amount;
        Ok(budget.clone())
    }
}

#[derive(Default)]
pub struct MockExpenseRepository {
    pub expenses: Mutex<Vec<Expense>>,
}

impl MockExpenseRepository {
    pub fn seed(&self, user_id: &str, category: &str, amount: Decimal, date: NaiveDate) {
        let mut expenses = self.expenses.lock().unwrap();
        let id = format!("expense-{}", expenses.len() + 1);
        expenses.push(Expense {
            id,
            category: category.to_string(),
            amount,
            date,
            user_id: user_id.to_string(),
            created_at: timestamp(),
        });
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for MockExpenseRepository {
    async fn create(&self, new_expense: NewExpense) -> Result<Expense> {
        self.seed(
            &new_expense.user_id,
            &new_expense.category,
            new_expense.amount,
            new_expense.date,
        );
        Ok(self.expenses.lock().unwrap().last().cloned().unwrap())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    fn list_for_user_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && e.date >= start && e.date < end)
            .cloned()
            .collect())
    }
}
