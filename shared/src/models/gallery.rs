//! Gallery Model

use serde::{Deserialize, Serialize};

/// Gallery image entity
///
/// Each image belongs to exactly one branch. `image_url` is produced by
/// the upload pathway and immutable once the record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: i64,
    pub branch_id: i64,
    pub image_url: String,
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub display_order: Option<i32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create gallery payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryInput {
    pub branch_id: i64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

/// Update gallery payload
///
/// No `image_url` field: the hosted file cannot be swapped, only the
/// record's metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}
