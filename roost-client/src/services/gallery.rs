//! Gallery operations
//!
//! CRUD on gallery records plus the upload pathway: one multipart call
//! carrying the binary and its metadata, answered with the fully-formed
//! created entity. Host-side file removal is backend-mediated only.

use serde::Serialize;
use shared::models::{Gallery, GalleryInput, GalleryUpdate};

use crate::{ClientResult, Gateway, ImageAttachment};

/// Metadata accompanying an image upload
#[derive(Debug, Clone, Default)]
pub struct GalleryUpload {
    pub branch_id: i64,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub display_order: Option<i32>,
}

/// Typed operations on the gallery collection
#[derive(Debug, Clone)]
pub struct GalleryService {
    gateway: Gateway,
}

impl GalleryService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// List gallery images, optionally restricted to one branch
    pub async fn list(&self, branch_id: Option<i64>) -> ClientResult<Vec<Gallery>> {
        let path = match branch_id {
            Some(id) => format!("/api/gallery?branch_id={id}"),
            None => "/api/gallery".to_string(),
        };
        self.gateway.get_list(&path).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Gallery> {
        self.gateway.get(&format!("/api/gallery/{id}")).await
    }

    pub async fn create(&self, input: &GalleryInput) -> ClientResult<Gallery> {
        self.gateway.post("/api/gallery", input).await
    }

    pub async fn update(&self, id: i64, update: &GalleryUpdate) -> ClientResult<Gallery> {
        self.gateway.put(&format!("/api/gallery/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.gateway.delete(&format!("/api/gallery/{id}")).await?;
        tracing::info!(id = %id, "Gallery record deleted");
        Ok(())
    }

    /// Upload an image and create its gallery record in a single call
    pub async fn upload(
        &self,
        request: &GalleryUpload,
        file: &ImageAttachment,
    ) -> ClientResult<Gallery> {
        let mut form =
            reqwest::multipart::Form::new().text("branch_id", request.branch_id.to_string());
        if let Some(title) = &request.title {
            form = form.text("title", title.clone());
        }
        if !request.tags.is_empty() {
            form = form.text("tags", serde_json::to_string(&request.tags)?);
        }
        if let Some(order) = request.display_order {
            form = form.text("display_order", order.to_string());
        }
        let form = form.part("image", file.to_part()?);

        let gallery: Gallery = self.gateway.post_multipart("/api/gallery/upload", form).await?;
        tracing::info!(id = %gallery.id, branch_id = %gallery.branch_id, "Gallery image uploaded");
        Ok(gallery)
    }

    /// Ask the backend to remove the hosted file behind `image_url`
    ///
    /// Record deletion is separate and authoritative; callers decide how
    /// much they care about this one failing.
    pub async fn delete_from_host(&self, image_url: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct HostDelete<'a> {
            image_url: &'a str,
        }
        self.gateway
            .delete_with_body("/api/gallery/delete-from-host", &HostDelete { image_url })
            .await
    }
}
