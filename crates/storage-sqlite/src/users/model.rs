//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetbook_core::users::{NewUser, User};

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            email: db.email,
            password_hash: db.password_hash,
            created_at: db.created_at,
        }
    }
}

impl NewUserDB {
    pub fn from_domain(domain: NewUser, id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            username: domain.username,
            email: domain.email,
            password_hash: domain.password_hash,
            created_at,
        }
    }
}
