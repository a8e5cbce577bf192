//! HTTP-facing error type.
//!
//! Every failure leaves the service as a JSON envelope:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::error::CookbookError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Converts the error into its client-facing payload.
    pub fn into_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.into_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

/// Maps domain failures onto HTTP semantics.
///
/// Unknown entries on direct lookup are `404`; every other cookbook failure is
/// a `400` carrying its kind in `details.kind`.
impl From<CookbookError> for AppError {
    fn from(err: CookbookError) -> Self {
        let kind = err.kind();
        let message = err.to_string();

        match err {
            CookbookError::EntryNotFound(name) => {
                AppError::not_found(message, json!({ "kind": kind, "name": name }))
            }
            CookbookError::DuplicateEntry(name)
            | CookbookError::RecipeNotFoundOrInvalid(name)
            | CookbookError::MissingReferencedEntry(name)
            | CookbookError::QuantityOverflow(name) => {
                AppError::bad_request(message, json!({ "kind": kind, "name": name }))
            }
            CookbookError::CyclicReference(path) => {
                AppError::bad_request(message, json!({ "kind": kind, "path": path }))
            }
            CookbookError::InvalidName
            | CookbookError::InvalidType(_)
            | CookbookError::InvalidCookTime
            | CookbookError::InvalidRequiredItems(_) => {
                AppError::bad_request(message, json!({ "kind": kind }))
            }
        }
    }
}
