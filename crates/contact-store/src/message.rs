//! Contact message records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission
///
/// The id is unique, assigned at creation, and never reused. Records are
/// never mutated after creation. The wire form uses camelCase names and an
/// RFC 3339 `createdAt`, matching the site's client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Serialized as `null` when the sender left it out
    pub telegram_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for a new submission; validated by the boundary layer before it
/// reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub telegram_username: Option<String>,
}
