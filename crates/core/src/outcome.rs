//! Result type returned by every mutating service operation.
//!
//! Services never redirect or render. They describe where the user should go
//! next and which one-shot message to show; the web layer turns that into a
//! redirect plus flash.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
    Info,
}

impl FlashCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Danger => "danger",
            FlashCategory::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashCategory::Success),
            "danger" => Some(FlashCategory::Danger),
            "info" => Some(FlashCategory::Info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
    pub category: FlashCategory,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: FlashCategory::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: FlashCategory::Danger,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: FlashCategory::Info,
        }
    }
}

/// Pages a service outcome can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Landing,
    Register,
    Login,
    Dashboard,
    AddBudget,
    UpdateBudget,
    AddExpense,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Landing => "/",
            Destination::Register => "/register",
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
            Destination::AddBudget => "/add_budget",
            Destination::UpdateBudget => "/update_budget",
            Destination::AddExpense => "/add_expenses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub destination: Destination,
    pub flash: Option<Flash>,
}

impl ActionOutcome {
    pub fn new(destination: Destination, flash: Flash) -> Self {
        Self {
            destination,
            flash: Some(flash),
        }
    }

    pub fn redirect(destination: Destination) -> Self {
        Self {
            destination,
            flash: None,
        }
    }
}

/// Turns a validation failure into a danger outcome pointing back at the form.
/// Any other error is passed through unchanged.
pub fn reject_invalid(destination: Destination, err: Error) -> Result<ActionOutcome> {
    match err {
        Error::Validation(reason) => Ok(ActionOutcome::new(
            destination,
            Flash::danger(reason.to_string()),
        )),
        other => Err(other),
    }
}
