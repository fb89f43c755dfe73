//! Game Error Types
//!
//! Game-specific error variants that render through the unified
//! `kernel::error::app_error::AppError` problem-details response.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Game-specific result type alias
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// Create payload carried no game fields at all
    #[error("Request body is empty")]
    EmptyPayload,

    /// Create payload could not be read as a JSON object of game fields
    #[error("Malformed request body: {0}")]
    MalformedPayload(String),

    /// A single field failed validation
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Unknown or malformed game id
    #[error("Game not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl GameError {
    /// Convert to AppError. Driver details stay out of the message.
    pub fn into_app_error(self) -> AppError {
        match self {
            GameError::EmptyPayload => AppError::bad_request(self.to_string())
                .with_action("Send the game fields as a JSON object with at least a title"),
            GameError::MalformedPayload(_) => AppError::bad_request(self.to_string())
                .with_action("Send a JSON object with Content-Type: application/json"),
            GameError::InvalidField { .. } => AppError::bad_request(self.to_string()),
            GameError::NotFound => AppError::not_found(self.to_string()),
            GameError::Database(e) => AppError::from(e),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GameError::Database(e) => {
                tracing::error!(error = %e, "Game database error");
            }
            _ => {
                tracing::debug!(error = %self, "Game request rejected");
            }
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for GameError {
    fn from(rejection: JsonRejection) -> Self {
        GameError::MalformedPayload(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(GameError::EmptyPayload.into_app_error().kind(), ErrorKind::BadRequest);
        assert_eq!(
            GameError::MalformedPayload("EOF while parsing".into())
                .into_app_error()
                .kind(),
            ErrorKind::BadRequest
        );

        let err = GameError::InvalidField {
            field: "title",
            reason: "is required".into(),
        }
        .into_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid field `title`: is required");
    }

    #[test]
    fn test_not_found() {
        let err = GameError::NotFound.into_app_error();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Game not found");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = GameError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(err.status_code(), 503);
        assert!(!err.message().contains("timed out"));
    }
}
