//! # Contact Store
//!
//! In-memory storage for contact-form submissions. Records are append-only
//! and live exactly as long as the process; there is no persistence.

pub mod message;
pub mod store;

pub use message::*;
pub use store::*;
