use std::sync::Arc;

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use budgetbook_core::SessionUser;

use crate::{error::AppResult, flash::IncomingFlash, main_lib::AppState, views};

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let view = state.report_service.get_dashboard(&user)?;
    let page = views::dashboard(&user, &view, flash.message());
    Ok(flash.finish(page))
}

async fn monthly_report(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let report = state.report_service.get_monthly_report(&user)?;
    let page = views::monthly_report(&user, &report, flash.message());
    Ok(flash.finish(page))
}

async fn download_report(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
) -> AppResult<Response> {
    let export = state.report_service.export_monthly_csv(&user)?;
    tracing::debug!("Exporting {} expense rows for {}", export.row_count, user.id);
    let headers = [
        (CONTENT_TYPE, "text/csv".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename={}", export.filename),
        ),
    ];
    Ok((headers, export.content).into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/monthly_report", get(monthly_report))
        .route("/download_report", get(download_report))
}
