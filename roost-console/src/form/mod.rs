//! Form assembly
//!
//! The branch form presents a record as independently growable field
//! groups and reduces them back into a payload on submit.

pub mod branch;
pub mod field_group;

pub use branch::{BranchForm, FieldError, PerkEntry, RoomRateEntry, ThumbnailPreview};
pub use field_group::FieldGroup;
