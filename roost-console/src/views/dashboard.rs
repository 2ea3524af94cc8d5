//! Dashboard view state

use crate::api::{BranchApi, EnquiryApi, GalleryApi};
use shared::models::EnquiryStatus;

/// Headline counts across the three collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub branches: usize,
    pub gallery_images: usize,
    pub enquiries: usize,
    pub pending_enquiries: usize,
}

pub struct Dashboard<B: BranchApi, G: GalleryApi, E: EnquiryApi> {
    branch_api: B,
    gallery_api: G,
    enquiry_api: E,
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<B: BranchApi, G: GalleryApi, E: EnquiryApi> Dashboard<B, G, E> {
    pub fn new(branch_api: B, gallery_api: G, enquiry_api: E) -> Self {
        Self {
            branch_api,
            gallery_api,
            enquiry_api,
            stats: None,
            loading: false,
            error: None,
        }
    }

    /// Fetch all three collections concurrently and derive the counts
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        let result = tokio::try_join!(
            self.branch_api.list(),
            self.gallery_api.list(None),
            self.enquiry_api.list(None),
        );
        match result {
            Ok((branches, galleries, enquiries)) => {
                self.stats = Some(DashboardStats {
                    branches: branches.len(),
                    gallery_images: galleries.len(),
                    enquiries: enquiries.len(),
                    pending_enquiries: enquiries
                        .iter()
                        .filter(|e| e.status == EnquiryStatus::Pending)
                        .count(),
                });
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }
}
