//! Error types for the dashboard server.
//!
//! Handlers return [`AppError`]; actix turns it into a JSON body of the form
//! `{"error": "..."}` with the status code of the error kind.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::grocery::BudgetCheck;

/// Errors surfaced through the JSON API.
#[derive(Error, Debug)]
pub enum AppError {
    /// A submitted form failed its required-field checks.
    #[error("{0}")]
    Validation(String),

    /// No signed-in session, or the credentials were wrong.
    #[error("{message}")]
    Unauthenticated { message: String },

    /// The requested record does not exist.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// A food order went over the weekly grocery budget.
    #[error("order total {} exceeds the budget of {}", crate::display::format_euros(.0.total_cents), crate::display::format_euros(.0.cap_cents))]
    BudgetExceeded(BudgetCheck),

    /// Reading or writing the session cookie failed.
    #[error("session error: {0}")]
    Session(String),

    /// Roster CSV could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The in-memory store lock was poisoned by a panicking handler.
    #[error("data store unavailable")]
    StorePoisoned,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Csv(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BudgetExceeded(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Session(_) | AppError::StorePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        match self {
            AppError::BudgetExceeded(check) => HttpResponse::build(status).json(json!({
                "error": self.to_string(),
                "budget": check,
            })),
            _ => HttpResponse::build(status).json(json!({ "error": self.to_string() })),
        }
    }
}
