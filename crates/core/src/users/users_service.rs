use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::users_model::{LoginForm, NewUser, RegistrationForm, SessionUser};
use super::users_traits::{
    LoginOutcome, PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait,
};
use crate::constants::{MSG_ACCOUNT_CREATED, MSG_EMAIL_TAKEN, MSG_LOGIN_FAILED};
use crate::errors::Result;
use crate::outcome::{reject_invalid, ActionOutcome, Destination, Flash};

/// Service for registration and login.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        Self { repository, hasher }
    }

    fn rejected() -> LoginOutcome {
        LoginOutcome::Rejected(ActionOutcome::new(
            Destination::Login,
            Flash::danger(MSG_LOGIN_FAILED),
        ))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, form: RegistrationForm) -> Result<ActionOutcome> {
        let (username, email) = match form.validate() {
            Ok(fields) => fields,
            Err(err) => return reject_invalid(Destination::Register, err),
        };

        let password_hash = self.hasher.hash_password(&form.password)?;
        let new_user = NewUser {
            id: None,
            username,
            email,
            password_hash,
        };

        match self.repository.create(new_user).await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                Ok(ActionOutcome::new(
                    Destination::Login,
                    Flash::success(MSG_ACCOUNT_CREATED),
                ))
            }
            Err(err) if err.is_unique_violation() => Ok(ActionOutcome::new(
                Destination::Register,
                Flash::danger(MSG_EMAIL_TAKEN),
            )),
            Err(err) => Err(err),
        }
    }

    fn authenticate(&self, form: &LoginForm) -> Result<LoginOutcome> {
        let email = form.email.trim();
        if email.is_empty() || form.password.is_empty() {
            return Ok(Self::rejected());
        }

        let Some(user) = self.repository.find_by_email(email)? else {
            debug!("Login rejected: no matching account");
            return Ok(Self::rejected());
        };

        if self
            .hasher
            .verify_password(&form.password, &user.password_hash)?
        {
            Ok(LoginOutcome::Authenticated(SessionUser::from(&user)))
        } else {
            debug!("Login rejected: password mismatch");
            Ok(Self::rejected())
        }
    }

    fn get_session_user(&self, user_id: &str) -> Result<Option<SessionUser>> {
        Ok(self
            .repository
            .find_by_id(user_id)?
            .map(|user| SessionUser::from(&user)))
    }
}
