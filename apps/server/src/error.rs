use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use budgetbook_core::errors::Error as CoreError;
use thiserror::Error;

use crate::auth::AuthError;
use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Auth(#[from] AuthError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Auth(AuthError::Unauthorized) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while handling your request.".to_string(),
            ),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Html(views::error_page(status, &message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
