//! Shared types for the Roost admin console
//!
//! Wire-level entity models, create/update payloads and the response
//! envelope shared between the gateway and the console.

pub mod models;
pub mod response;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
