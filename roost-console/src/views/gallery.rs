//! Gallery panel view state
//!
//! Combined load of the (optionally filtered) image list and the branch
//! lookup list; both must settle before the panel renders. Deleting an
//! image removes the record first (the authoritative deletion), then asks
//! the backend to clean up the hosted file; a failure there is logged and
//! swallowed rather than shown.

use roost_client::{GalleryUpload, ImageAttachment};
use shared::models::{Branch, Gallery};

use crate::api::{BranchApi, GalleryApi};

pub struct GalleryPanel<G: GalleryApi, B: BranchApi> {
    gallery_api: G,
    branch_api: B,
    pub galleries: Vec<Gallery>,
    pub branches: Vec<Branch>,
    pub branch_filter: Option<i64>,
    pub loading: bool,
    pub uploading: bool,
    pub error: Option<String>,
    pub show_upload: bool,
    pub delete_dialog: Option<Gallery>,
}

impl<G: GalleryApi, B: BranchApi> GalleryPanel<G, B> {
    pub fn new(gallery_api: G, branch_api: B) -> Self {
        Self {
            gallery_api,
            branch_api,
            galleries: Vec::new(),
            branches: Vec::new(),
            branch_filter: None,
            loading: false,
            uploading: false,
            error: None,
            show_upload: false,
            delete_dialog: None,
        }
    }

    /// Load (or retry) both lists concurrently; one aggregated error
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        let result = tokio::try_join!(
            self.gallery_api.list(self.branch_filter),
            self.branch_api.list(),
        );
        match result {
            Ok((galleries, branches)) => {
                self.galleries = galleries;
                self.branches = branches;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Change the branch filter and reload
    pub async fn set_branch_filter(&mut self, branch_id: Option<i64>) {
        self.branch_filter = branch_id;
        self.refresh().await;
    }

    /// Upload an image; the created record joins the local list
    pub async fn upload(&mut self, request: GalleryUpload, file: ImageAttachment) {
        self.uploading = true;
        self.error = None;
        match self.gallery_api.upload(&request, &file).await {
            Ok(created) => {
                self.galleries.push(created);
                self.show_upload = false;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.uploading = false;
    }

    pub fn request_delete(&mut self, gallery: Gallery) {
        self.delete_dialog = Some(gallery);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = None;
    }

    /// Confirm the pending delete
    pub async fn confirm_delete(&mut self) {
        let Some(gallery) = self.delete_dialog.take() else {
            return;
        };
        if let Err(e) = self.gallery_api.delete(gallery.id).await {
            self.error = Some(e.to_string());
            return;
        }
        // Best-effort host cleanup; the record is already gone
        if let Err(e) = self.gallery_api.delete_from_host(&gallery.image_url).await {
            tracing::warn!(id = %gallery.id, error = %e, "Image host deletion failed");
        }
        self.galleries.retain(|g| g.id != gallery.id);
    }
}
