//! # Contact API
//!
//! HTTP boundary for the contact message store: request validation, response
//! envelopes, and the two `/api/contact` routes. The store itself is injected
//! at router construction.

pub mod dto;
pub mod error;
pub mod routes;

pub use dto::*;
pub use error::*;
pub use routes::*;
