//! View-state controllers
//!
//! One controller per screen. Each holds its own loading/error/selection
//! state, catches every failure at the top of the initiating action as a
//! display string, and reconciles local lists after mutations. Retry is
//! just re-running the same action.

pub mod branches;
pub mod dashboard;
pub mod editor;
pub mod enquiries;
pub mod gallery;

pub use branches::BranchDirectory;
pub use dashboard::{Dashboard, DashboardStats};
pub use editor::{BranchEditor, EditorMode};
pub use enquiries::EnquiryBoard;
pub use gallery::GalleryPanel;
