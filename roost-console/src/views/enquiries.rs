//! Enquiry board view state
//!
//! Branch filtering happens server-side (query parameter); status
//! filtering is purely local. Status changes are reconciled from the
//! entity the backend returns, not from what was asked for.

use shared::models::{Branch, Enquiry, EnquiryStatus, EnquiryUpdate};

use crate::api::{BranchApi, EnquiryApi};

pub struct EnquiryBoard<E: EnquiryApi, B: BranchApi> {
    enquiry_api: E,
    branch_api: B,
    pub enquiries: Vec<Enquiry>,
    pub branches: Vec<Branch>,
    pub branch_filter: Option<i64>,
    /// `None` shows every status
    pub status_filter: Option<EnquiryStatus>,
    pub selected: Option<Enquiry>,
    pub delete_dialog: Option<Enquiry>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<E: EnquiryApi, B: BranchApi> EnquiryBoard<E, B> {
    pub fn new(enquiry_api: E, branch_api: B) -> Self {
        Self {
            enquiry_api,
            branch_api,
            enquiries: Vec::new(),
            branches: Vec::new(),
            branch_filter: None,
            status_filter: None,
            selected: None,
            delete_dialog: None,
            loading: false,
            error: None,
        }
    }

    /// Load (or retry) enquiries and the branch lookup list concurrently
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        let result = tokio::try_join!(
            self.enquiry_api.list(self.branch_filter),
            self.branch_api.list(),
        );
        match result {
            Ok((enquiries, branches)) => {
                self.enquiries = enquiries;
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

    /// Rows passing the local status filter
    pub fn visible(&self) -> Vec<&Enquiry> {
        self.enquiries
            .iter()
            .filter(|e| self.status_filter.is_none_or(|status| e.status == status))
            .collect()
    }

    pub fn select(&mut self, enquiry: Enquiry) {
        self.selected = Some(enquiry);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Move an enquiry to a new status; transitions are free-form
    pub async fn set_status(&mut self, id: i64, status: EnquiryStatus) {
        let update = EnquiryUpdate {
            status: Some(status),
            ..Default::default()
        };
        match self.enquiry_api.update(id, &update).await {
            Ok(updated) => {
                if let Some(slot) = self.enquiries.iter_mut().find(|e| e.id == id) {
                    *slot = updated.clone();
                }
                if self.selected.as_ref().is_some_and(|s| s.id == id) {
                    self.selected = Some(updated);
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn request_delete(&mut self, enquiry: Enquiry) {
        self.delete_dialog = Some(enquiry);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = None;
    }

    /// Confirm the pending delete; the row disappears locally on success
    pub async fn confirm_delete(&mut self) {
        let Some(enquiry) = self.delete_dialog.take() else {
            return;
        };
        match self.enquiry_api.delete(enquiry.id).await {
            Ok(()) => {
                self.enquiries.retain(|e| e.id != enquiry.id);
                if self.selected.as_ref().is_some_and(|s| s.id == enquiry.id) {
                    self.selected = None;
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
