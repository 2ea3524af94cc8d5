//! Image attachments
//!
//! In-memory representation of a file destined for a multipart request.
//! Validation happens here, before any network call.

use std::path::Path;

use crate::{ClientError, ClientResult};

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// An image file held in memory until submit
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Wrap bytes already in memory (drag-and-drop, clipboard, tests)
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read an image from disk, validating extension and size
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(ClientError::Validation(format!(
                "Unsupported format '{}'. Supported: {}",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::Validation(format!("Failed to read file: {e}")))?;
        if bytes.is_empty() {
            return Err(ClientError::Validation("Empty file".to_string()));
        }
        if bytes.len() > MAX_FILE_SIZE {
            return Err(ClientError::Validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Build the binary part of a multipart form
    pub(crate) fn to_part(&self) -> ClientResult<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.content_type)
            .map_err(|e| ClientError::Validation(format!("Invalid content type: {e}")))
    }
}
