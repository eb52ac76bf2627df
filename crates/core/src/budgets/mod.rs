//! Budgets module - one spending ceiling per user per month.

mod budgets_model;
mod budgets_service;
mod budgets_traits;


pub use budgets_model::{Budget, BudgetForm, BudgetLookup, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
