use std::sync::Arc;

use axum::{extract::State, response::Response, routing::get, Extension, Form, Router};
use budgetbook_core::{expenses::ExpenseForm, SessionUser};

use crate::{
    error::AppResult,
    flash::{redirect_with, IncomingFlash},
    main_lib::AppState,
    views,
};

async fn add_expense_page(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    flash: IncomingFlash,
) -> Response {
    let page = views::add_expense_form(&user, state.clock.today(), flash.message());
    flash.finish(page)
}

async fn add_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Form(form): Form<ExpenseForm>,
) -> AppResult<Response> {
    let outcome = state.expense_service.add_expense(&user, form).await?;
    Ok(redirect_with(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/add_expenses", get(add_expense_page).post(add_expense))
}
