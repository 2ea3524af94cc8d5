//! Roost Client - HTTP gateway to the admin backend
//!
//! Typed, envelope-unwrapping access to the branch, gallery and enquiry
//! collections. All network I/O in the console goes through this crate;
//! nothing else touches raw transport.

pub mod attachment;
pub mod config;
pub mod error;
pub mod http;
mod multipart;
pub mod services;

pub use attachment::ImageAttachment;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::Gateway;
pub use services::{BranchService, EnquiryService, GalleryService, GalleryUpload};

// Re-export shared types for convenience
pub use shared::ApiResponse;
