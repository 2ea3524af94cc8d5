//! Typed per-collection operations
//!
//! One service per backend collection, all sharing the same gateway.

pub mod branches;
pub mod enquiries;
pub mod gallery;

pub use branches::BranchService;
pub use enquiries::EnquiryService;
pub use gallery::{GalleryService, GalleryUpload};
