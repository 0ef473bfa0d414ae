//! API error taxonomy
//!
//! Two classes only: validation errors recovered at the boundary as
//! structured 400s, and unexpected errors reported as opaque 500s. Nothing
//! here is fatal to the process.

use crate::dto::{ErrorResponse, FieldError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use validator::ValidationErrors;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// Unexpected failure; the string is the client-facing message, details
    /// go to the log only.
    #[error("{0}")]
    Internal(String),
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| FieldError {
                field: field.to_string(),
                message: violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string()),
            })
        })
        .collect();
    // field_errors() iterates a map; fix the order for clients and tests
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body = ErrorResponse {
                    success: false,
                    message: "Validation failed".to_string(),
                    errors: Some(field_errors(&errors)),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("internal error: {message}");
                let body = ErrorResponse {
                    success: false,
                    message,
                    errors: None,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ContactRequest;
    use validator::Validate;

    #[test]
    fn test_one_entry_per_violated_field() {
        let request = ContactRequest {
            name: "Jo".to_string(),
            email: "bad".to_string(),
            subject: "Hi".to_string(),
            message: "short".to_string(),
            telegram_username: None,
        };

        let errors = request.validate().unwrap_err();
        let fields = field_errors(&errors);

        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["email", "message", "subject"]);
    }

    #[test]
    fn test_valid_request_passes() {
        let request = ContactRequest {
            name: "Alice Smith".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a sufficiently long message.".to_string(),
            telegram_username: None,
        };

        assert!(request.validate().is_ok());
    }
}
