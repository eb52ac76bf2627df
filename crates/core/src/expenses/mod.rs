//! Expenses module - immutable spend records.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{total_amount, Expense, ExpenseForm, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
