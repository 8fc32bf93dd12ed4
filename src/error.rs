//! Error types and HTTP response handling.
//!
//! Validation and permission failures surface as `BadRequest` and render as
//! a 400 with the reason as plain text, which is terminal for the request.
//! Infrastructure failures map to a bare 500 with details logged
//! server-side only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid parameters, unknown records, or insufficient permissions.
    #[error("{0}")]
    BadRequest(String),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing failure.
    #[error("password hash error: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl AppError {
    /// Shorthand for the inline validation failures used across handlers.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::Db(err) => {
                error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
            }
            AppError::Session(err) => {
                error!("Session error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
            }
            AppError::PasswordHash(err) => {
                error!("Password hash error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
            }
        }
    }
}
