// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::StatusReply;
use crate::services::chatbot::{ChatError, UNEXPECTED_ERROR_REPLY};

/// Errors a handler can return. Every variant renders as
/// `{"success": false, "message": ...}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    /// The message is what the client sees; the cause is only logged.
    #[error("{0}")]
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::MissingMessage => AppError::BadRequest(err.to_string()),
            ChatError::Unexpected(cause) => {
                tracing::error!(error = %cause, "AI chat error");
                AppError::Internal(UNEXPECTED_ERROR_REPLY.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(StatusReply::failure(self.to_string()))).into_response()
    }
}
