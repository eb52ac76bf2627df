use async_trait::async_trait;
use budgetbook_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use budgetbook_core::Result;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::utils::date_to_text;

pub struct ExpenseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn create(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let new_expense_db = NewExpenseDB::from_domain(
                    new_expense,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );

                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let expenses_db = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .order((expenses::date.desc(), expenses::created_at.desc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(expenses_db.into_iter().map(Expense::from).collect())
    }

    fn list_for_user_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let expenses_db = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::date.ge(date_to_text(start)))
            .filter(expenses::date.lt(date_to_text(end)))
            .order((expenses::date.asc(), expenses::created_at.asc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(expenses_db.into_iter().map(Expense::from).collect())
    }
}
