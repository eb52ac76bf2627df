use async_trait::async_trait;
use budgetbook_core::users::{NewUser, User, UserRepositoryTrait};
use budgetbook_core::Result;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db = NewUserDB::from_domain(
                    new_user,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );

                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use tempfile::tempdir;

    async fn create_test_repository() -> (UserRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        (UserRepository::new(pool, writer), temp_dir)
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            id: None,
            username: "alice".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let (repo, _dir) = create_test_repository().await;

        let created = repo.create(new_user("a@x.io")).await.unwrap();
        assert!(!created.id.is_empty());

        let found = repo.find_by_email("a@x.io").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "$argon2id$stub");
        assert!(repo.find_by_email("b@x.io").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let (repo, _dir) = create_test_repository().await;
        let created = repo.create(new_user("a@x.io")).await.unwrap();

        assert_eq!(repo.find_by_id(&created.id).unwrap().unwrap().email, "a@x.io");
        assert!(repo.find_by_id("missing").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_unique_violation() {
        let (repo, _dir) = create_test_repository().await;
        repo.create(new_user("a@x.io")).await.unwrap();

        let err = repo.create(new_user("a@x.io")).await.unwrap_err();
        assert!(err.is_unique_violation());
    }
}
