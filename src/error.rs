use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("No data associated with the inputted user_email: {0}")]
    UnknownUser(String),

    #[error("Time specified is of an invalid format: {0}")]
    BadTimestamp(String),

    #[error("No heart rate readings in the requested interval")]
    NoReadings,

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        // Every client-caused failure, including unknown emails, is 400.
        let (status, error_message, details) = match self {
            AppError::InvalidInput(err) => (
                StatusCode::BAD_REQUEST,
                "Invalid input.".to_string(),
                Some(err.to_string()),
            ),
            AppError::UnknownUser(email) => (
                StatusCode::BAD_REQUEST,
                "No data associated with the inputted user_email.".to_string(),
                Some(email),
            ),
            AppError::BadTimestamp(input) => (
                StatusCode::BAD_REQUEST,
                "Time specified is of an invalid format.".to_string(),
                Some(input),
            ),
            AppError::NoReadings => (
                StatusCode::BAD_REQUEST,
                "No heart rate readings in the requested interval.".to_string(),
                None,
            ),
            AppError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                Some(err.to_string()),
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
            ),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(err.to_string()),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}
