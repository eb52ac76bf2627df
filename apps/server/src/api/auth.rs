use std::sync::Arc;

use axum::{
    extract::State,
    response::Response,
    routing::get,
    Extension, Form, Router,
};
use budgetbook_core::{
    users::{LoginForm, LoginOutcome, RegistrationForm},
    ActionOutcome, Destination,
};

use crate::{
    auth::SessionClaims,
    cookies::append_set_cookie,
    error::AppResult,
    flash::{redirect_with, IncomingFlash},
    main_lib::AppState,
    views,
};

async fn landing(flash: IncomingFlash) -> Response {
    let page = views::landing(flash.message());
    flash.finish(page)
}

async fn register_page(flash: IncomingFlash) -> Response {
    let page = views::register_form(flash.message());
    flash.finish(page)
}

async fn register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegistrationForm>,
) -> AppResult<Response> {
    let outcome = state.user_service.register(form).await?;
    Ok(redirect_with(outcome))
}

async fn login_page(flash: IncomingFlash) -> Response {
    let page = views::login_form(flash.message());
    flash.finish(page)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match state.user_service.authenticate(&form)? {
        LoginOutcome::Authenticated(user) => {
            let token = state.sessions.issue_token(&user)?;
            tracing::info!("User {} logged in", user.id);
            let mut response = redirect_with(ActionOutcome::redirect(Destination::Dashboard));
            append_set_cookie(&mut response, &state.sessions.session_cookie(&token));
            Ok(response)
        }
        LoginOutcome::Rejected(outcome) => Ok(redirect_with(outcome)),
    }
}

async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> Response {
    state.sessions.revoke(&claims);
    tracing::info!("User {} logged out", claims.sub);
    let mut response = redirect_with(ActionOutcome::redirect(Destination::Landing));
    append_set_cookie(&mut response, &state.sessions.clear_cookie());
    response
}

async fn healthz() -> &'static str {
    "ok"
}

/// Routes reachable without a session.
pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing))
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/healthz", get(healthz))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/logout", get(logout))
}
