//! Request and response bodies for the contact endpoints

use contact_store::{ContactMessage, NewMessage};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Incoming contact-form submission
///
/// Validation mirrors the site's form rules; the store only ever sees input
/// that passed them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 3, message = "Subject must be at least 3 characters"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
    pub telegram_username: Option<String>,
}

impl From<ContactRequest> for NewMessage {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            telegram_username: request.telegram_username,
        }
    }
}

/// 201 body for a stored submission
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: CreatedData,
}

#[derive(Debug, Serialize)]
pub struct CreatedData {
    pub id: String,
}

/// 200 body for the message listing, newest first
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<ContactMessage>,
}

/// Error body shared by 400 and 500 responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// One violated validation rule
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
