//! Users module - registration, credential checks and session identity.

mod users_model;
mod users_service;
mod users_traits;

#[cfg(test)]
mod users_service_tests;

pub use users_model::{LoginForm, NewUser, RegistrationForm, SessionUser, User};
pub use users_service::UserService;
pub use users_traits::{LoginOutcome, PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
