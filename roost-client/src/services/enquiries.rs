//! Enquiry operations

use shared::models::{Enquiry, EnquiryInput, EnquiryUpdate};

use crate::{ClientResult, Gateway};

/// Typed operations on the enquiry collection
#[derive(Debug, Clone)]
pub struct EnquiryService {
    gateway: Gateway,
}

impl EnquiryService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// List enquiries, optionally restricted to one branch
    pub async fn list(&self, branch_id: Option<i64>) -> ClientResult<Vec<Enquiry>> {
        let path = match branch_id {
            Some(id) => format!("/api/enquiries?branch_id={id}"),
            None => "/api/enquiries".to_string(),
        };
        self.gateway.get_list(&path).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Enquiry> {
        self.gateway.get(&format!("/api/enquiries/{id}")).await
    }

    pub async fn create(&self, input: &EnquiryInput) -> ClientResult<Enquiry> {
        self.gateway.post("/api/enquiries", input).await
    }

    pub async fn update(&self, id: i64, update: &EnquiryUpdate) -> ClientResult<Enquiry> {
        self.gateway
            .put(&format!("/api/enquiries/{id}"), update)
            .await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.gateway.delete(&format!("/api/enquiries/{id}")).await?;
        tracing::info!(id = %id, "Enquiry deleted");
        Ok(())
    }
}
