//! Enquiry Model

use serde::{Deserialize, Serialize};

/// Triage status of an enquiry
///
/// Absent on the wire means `pending`; that default is resolved here, at
/// the serde boundary, not in display code. Transitions are free-form:
/// any status may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    Pending,
    Contacted,
    Converted,
    Closed,
}

impl EnquiryStatus {
    /// All statuses, in triage order (for filter/select widgets)
    pub const ALL: [EnquiryStatus; 4] = [
        EnquiryStatus::Pending,
        EnquiryStatus::Contacted,
        EnquiryStatus::Converted,
        EnquiryStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "pending",
            EnquiryStatus::Contacted => "contacted",
            EnquiryStatus::Converted => "converted",
            EnquiryStatus::Closed => "closed",
        }
    }
}

/// Customer enquiry entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub message: Option<String>,
    pub branch_id: Option<i64>,
    /// Where the enquiry came from (website form, walk-in, referral, ...)
    pub source: Option<String>,
    #[serde(default)]
    pub status: EnquiryStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create enquiry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryInput {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnquiryStatus>,
}

/// Update enquiry payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnquiryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnquiryStatus>,
}
