//! User repository, credential and service traits.
//!
//! These traits define the contract for user operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::users_model::{LoginForm, NewUser, RegistrationForm, SessionUser, User};
use crate::errors::Result;
use crate::outcome::ActionOutcome;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Persists a new user and returns the stored record.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Looks a user up by exact email.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Looks a user up by id.
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
}

/// Hashes and verifies passwords. The algorithm is an implementation detail.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Returns `Ok(false)` on mismatch; `Err` only for malformed hashes or
    /// internal failures.
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials matched; the caller should establish a session.
    Authenticated(SessionUser),
    /// Credentials did not match. Same outcome for unknown email and wrong password.
    Rejected(ActionOutcome),
}

/// Trait defining the contract for registration and authentication.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, form: RegistrationForm) -> Result<ActionOutcome>;

    fn authenticate(&self, form: &LoginForm) -> Result<LoginOutcome>;

    /// Resolves a session's user id back to the user, if it still exists.
    fn get_session_user(&self, user_id: &str) -> Result<Option<SessionUser>>;
}
