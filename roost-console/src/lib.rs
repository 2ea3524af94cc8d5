//! Roost Console - entity editing surface
//!
//! View-state controllers and the branch form assembly on top of the
//! gateway. Rendering is left to the embedding shell; this crate models
//! state and behavior only: what is loading, what failed, what is
//! selected, and how local lists reconcile after mutations.

pub mod api;
pub mod form;
pub mod views;

pub use api::{BranchApi, EnquiryApi, GalleryApi};
pub use form::{BranchForm, FieldError, FieldGroup, PerkEntry, RoomRateEntry, ThumbnailPreview};
pub use views::{
    BranchDirectory, BranchEditor, Dashboard, DashboardStats, EditorMode, EnquiryBoard,
    GalleryPanel,
};
