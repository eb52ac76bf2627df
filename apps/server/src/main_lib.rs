use std::sync::Arc;

use budgetbook_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    users::{UserService, UserServiceTrait},
    Clock, SystemClock,
};
use budgetbook_storage_sqlite::{
    db::{self, write_actor},
    BudgetRepository, ExpenseRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    auth::{decode_secret_key, generate_secret_key, Argon2PasswordHasher, SessionManager},
    config::Config,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub sessions: Arc<SessionManager>,
    pub clock: Arc<dyn Clock>,
}

pub fn init_tracing() {
    let log_format = std::env::var("BB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with_clock(config, Arc::new(SystemClock)).await
}

/// Wires repositories and services against the configured database, reading
/// "now" from `clock`.
pub async fn build_state_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));

    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(
        user_repository,
        Arc::new(Argon2PasswordHasher),
    ));
    let budget_service: Arc<dyn BudgetServiceTrait> = Arc::new(BudgetService::new(
        budget_repository.clone(),
        clock.clone(),
    ));
    let expense_service: Arc<dyn ExpenseServiceTrait> =
        Arc::new(ExpenseService::new(expense_repository.clone()));
    let report_service: Arc<dyn ReportServiceTrait> = Arc::new(ReportService::new(
        budget_repository,
        expense_repository,
        clock.clone(),
    ));

    let secret = match config.session_secret.as_deref() {
        Some(raw) => decode_secret_key(raw)?,
        None => {
            tracing::warn!(
                "BB_SESSION_SECRET is not set; using a random secret. Sessions end on restart."
            );
            generate_secret_key()
        }
    };
    let sessions = Arc::new(SessionManager::new(
        &secret,
        config.session_ttl,
        config.secure_cookies,
    ));

    Ok(Arc::new(AppState {
        user_service,
        budget_service,
        expense_service,
        report_service,
        sessions,
        clock,
    }))
}
