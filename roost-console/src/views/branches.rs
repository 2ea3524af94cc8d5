//! Branch directory view state

use shared::models::Branch;

use crate::api::BranchApi;

/// List screen: rows, a retryable error, and the pending delete confirmation
pub struct BranchDirectory<A: BranchApi> {
    api: A,
    pub branches: Vec<Branch>,
    pub loading: bool,
    pub error: Option<String>,
    pub delete_dialog: Option<Branch>,
}

impl<A: BranchApi> BranchDirectory<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            branches: Vec::new(),
            loading: false,
            error: None,
            delete_dialog: None,
        }
    }

    /// Load (or retry) the branch list
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.list().await {
            Ok(branches) => self.branches = branches,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    pub fn request_delete(&mut self, branch: Branch) {
        self.delete_dialog = Some(branch);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = None;
    }

    /// Confirm the pending delete; the row disappears locally on success
    pub async fn confirm_delete(&mut self) {
        let Some(branch) = self.delete_dialog.take() else {
            return;
        };
        match self.api.delete(branch.id).await {
            Ok(()) => self.branches.retain(|b| b.id != branch.id),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
