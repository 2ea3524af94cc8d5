//! Data models
//!
//! Shared between the console and the backend API. All IDs are `i64` and
//! assigned by the backend; `created_at`/`updated_at` are server-stamped
//! opaque strings the console never interprets.

pub mod branch;
pub mod enquiry;
pub mod gallery;

// Re-exports
pub use branch::*;
pub use enquiry::*;
pub use gallery::*;
