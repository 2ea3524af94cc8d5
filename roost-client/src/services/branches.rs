//! Branch operations

use shared::models::{Branch, BranchInput, BranchUpdate};

use crate::multipart::{branch_input_fields, branch_update_fields, to_form};
use crate::{ClientResult, Gateway, ImageAttachment};

/// Typed operations on the branch collection
///
/// `create`/`update` pick the request encoding purely from attachment
/// presence: no thumbnail means a structured JSON body, a thumbnail means
/// multipart with JSON-encoded list fields.
#[derive(Debug, Clone)]
pub struct BranchService {
    gateway: Gateway,
}

impl BranchService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> ClientResult<Vec<Branch>> {
        self.gateway.get_list("/api/branches").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Branch> {
        self.gateway.get(&format!("/api/branches/{id}")).await
    }

    /// Create a branch, optionally attaching a thumbnail
    pub async fn create(
        &self,
        input: &BranchInput,
        thumbnail: Option<&ImageAttachment>,
    ) -> ClientResult<Branch> {
        let branch: Branch = match thumbnail {
            Some(file) => {
                let form = to_form(branch_input_fields(input)?, file)?;
                self.gateway.post_multipart("/api/branches", form).await?
            }
            None => self.gateway.post("/api/branches", input).await?,
        };
        tracing::info!(id = %branch.id, name = %branch.name, "Branch created");
        Ok(branch)
    }

    /// Partially update a branch; without a new thumbnail the field is
    /// omitted entirely and the server-side value stays as it is
    pub async fn update(
        &self,
        id: i64,
        update: &BranchUpdate,
        thumbnail: Option<&ImageAttachment>,
    ) -> ClientResult<Branch> {
        let path = format!("/api/branches/{id}");
        let branch: Branch = match thumbnail {
            Some(file) => {
                let form = to_form(branch_update_fields(update)?, file)?;
                self.gateway.put_multipart(&path, form).await?
            }
            None => self.gateway.put(&path, update).await?,
        };
        tracing::info!(id = %branch.id, "Branch updated");
        Ok(branch)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.gateway.delete(&format!("/api/branches/{id}")).await?;
        tracing::info!(id = %id, "Branch deleted");
        Ok(())
    }
}
