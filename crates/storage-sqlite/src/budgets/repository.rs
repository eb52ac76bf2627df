use async_trait::async_trait;
use budgetbook_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use budgetbook_core::Result;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let budgets_db = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::created_at.asc())
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(budgets_db.into_iter().map(Budget::from).collect())
    }

    fn find_for_month(&self, user_id: &str, month: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        // SQLite LIKE ignores ASCII case; month names carry no wildcards.
        let budget_db = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::month.like(month))
            .order(budgets::created_at.asc())
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(budget_db.map(Budget::from))
    }

    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let new_budget_db = NewBudgetDB::from_domain(
                    new_budget,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );

                let result_db = diesel::insert_into(budgets::table)
                    .values(&new_budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn update_amount(&self, budget_id: &str, amount: Decimal) -> Result<Budget> {
        let budget_id_owned = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let result_db = diesel::update(budgets::table.find(&budget_id_owned))
                    .set((
                        budgets::amount.eq(amount.to_string()),
                        budgets::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }
}
