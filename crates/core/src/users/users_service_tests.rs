#[cfg(test)]
mod tests {
    use crate::constants::{MSG_ACCOUNT_CREATED, MSG_EMAIL_TAKEN, MSG_LOGIN_FAILED};
    use crate::errors::{DatabaseError, Error, Result};
    use crate::outcome::{Destination, FlashCategory};
    use crate::users::{
        LoginForm, LoginOutcome, NewUser, PasswordHasherTrait, RegistrationForm, User,
        UserRepositoryTrait, UserService, UserServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    // --- Mock UserRepository ---
    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        async fn create(&self, new_user: NewUser) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == new_user.email) {
                return Err(Error::Database(DatabaseError::UniqueViolation(
                    "users.email".to_string(),
                )));
            }
            let user = User {
                id: format!("user-{}", users.len() + 1),
                username: new_user.username,
                email: new_user.email,
                password_hash: new_user.password_hash,
                created_at: NaiveDate::from_ymd_opt(2026, 10, 1)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            };
            users.push(user.clone());
            Ok(user)
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }
    }

    // --- Mock hasher: reversible so tests can inspect stored hashes ---
    struct PrefixHasher;

    impl PasswordHasherTrait for PrefixHasher {
        fn hash_password(&self, password: &str) -> Result<String> {
            Ok(format!("hashed:{password}"))
        }

        fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
            Ok(password_hash == format!("hashed:{password}"))
        }
    }

    fn setup() -> (Arc<MockUserRepository>, UserService) {
        let repo = Arc::new(MockUserRepository::default());
        let service = UserService::new(repo.clone(), Arc::new(PrefixHasher));
        (repo, service)
    }

    fn registration(username: &str, email: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_redirects_to_login() {
        let (repo, service) = setup();

        let outcome = service
            .register(registration("u1", "u1@x.com", "pw"))
            .await
            .unwrap();

        assert_eq!(outcome.destination, Destination::Login);
        let flash = outcome.flash.unwrap();
        assert_eq!(flash.category, FlashCategory::Success);
        assert_eq!(flash.message, MSG_ACCOUNT_CREATED);

        let stored = repo.find_by_email("u1@x.com").unwrap().unwrap();
        assert_eq!(stored.username, "u1");
        assert_eq!(stored.password_hash, "hashed:pw");
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let (repo, service) = setup();

        let outcome = service
            .register(registration("u1", "  ", "pw"))
            .await
            .unwrap();

        assert_eq!(outcome.destination, Destination::Register);
        assert_eq!(outcome.flash.unwrap().category, FlashCategory::Danger);
        assert!(repo.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_reported() {
        let (_repo, service) = setup();
        service
            .register(registration("u1", "u1@x.com", "pw"))
            .await
            .unwrap();

        let outcome = service
            .register(registration("u2", "u1@x.com", "other"))
            .await
            .unwrap();

        assert_eq!(outcome.destination, Destination::Register);
        assert_eq!(outcome.flash.unwrap().message, MSG_EMAIL_TAKEN);
    }

    #[tokio::test]
    async fn test_authenticate_success_returns_session_user() {
        let (_repo, service) = setup();
        service
            .register(registration("u1", "u1@x.com", "pw"))
            .await
            .unwrap();

        match service.authenticate(&login("u1@x.com", "pw")).unwrap() {
            LoginOutcome::Authenticated(user) => {
                assert_eq!(user.username, "u1");
                assert_eq!(user.id, "user-1");
            }
            other => panic!("expected authenticated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let (_repo, service) = setup();
        service
            .register(registration("u1", "u1@x.com", "pw"))
            .await
            .unwrap();

        let wrong_password = service.authenticate(&login("u1@x.com", "nope")).unwrap();
        let unknown_email = service.authenticate(&login("ghost@x.com", "pw")).unwrap();

        assert_eq!(wrong_password, unknown_email);
        match wrong_password {
            LoginOutcome::Rejected(outcome) => {
                assert_eq!(outcome.destination, Destination::Login);
                let flash = outcome.flash.unwrap();
                assert_eq!(flash.category, FlashCategory::Danger);
                assert_eq!(flash.message, MSG_LOGIN_FAILED);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_session_user_resolves_existing_ids_only() {
        let (_repo, service) = setup();
        service
            .register(registration("u1", "u1@x.com", "pw"))
            .await
            .unwrap();

        assert_eq!(
            service.get_session_user("user-1").unwrap().unwrap().username,
            "u1"
        );
        assert!(service.get_session_user("user-99").unwrap().is_none());
    }
}
