use std::sync::Arc;

use axum::{extract::State, response::Response, routing::get, Extension, Form, Router};
use budgetbook_core::{
    budgets::{BudgetForm, BudgetLookup},
    utils::ReportPeriod,
    SessionUser,
};

use crate::{
    error::AppResult,
    flash::{redirect_with, IncomingFlash},
    main_lib::AppState,
    views,
};

async fn add_budget_page(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    flash: IncomingFlash,
) -> Response {
    let month = ReportPeriod::current(state.clock.as_ref()).month_name();
    let page = views::add_budget_form(&user, &month, flash.message());
    flash.finish(page)
}

async fn add_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Form(form): Form<BudgetForm>,
) -> AppResult<Response> {
    let outcome = state.budget_service.add_budget(&user, form).await?;
    Ok(redirect_with(outcome))
}

async fn update_budget_page(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    match state.budget_service.budget_for_update(&user)? {
        BudgetLookup::Found(budget) => {
            let page = views::update_budget_form(&user, &budget, flash.message());
            Ok(flash.finish(page))
        }
        BudgetLookup::Missing(outcome) => Ok(redirect_with(outcome)),
    }
}

async fn update_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Form(form): Form<BudgetForm>,
) -> AppResult<Response> {
    let outcome = state.budget_service.update_budget(&user, form).await?;
    Ok(redirect_with(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_budget", get(add_budget_page).post(add_budget))
        .route("/update_budget", get(update_budget_page).post(update_budget))
}
