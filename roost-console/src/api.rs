//! Gateway seams for the view layer
//!
//! View controllers depend on these traits instead of the concrete
//! services so they can be exercised against in-memory fakes.

use async_trait::async_trait;
use roost_client::{
    BranchService, ClientResult, EnquiryService, GalleryService, GalleryUpload, ImageAttachment,
};
use shared::models::{
    Branch, BranchInput, BranchUpdate, Enquiry, EnquiryInput, EnquiryUpdate, Gallery,
    GalleryInput, GalleryUpdate,
};

#[async_trait]
pub trait BranchApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Branch>>;
    async fn get(&self, id: i64) -> ClientResult<Branch>;
    async fn create(
        &self,
        input: &BranchInput,
        thumbnail: Option<&ImageAttachment>,
    ) -> ClientResult<Branch>;
    async fn update(
        &self,
        id: i64,
        update: &BranchUpdate,
        thumbnail: Option<&ImageAttachment>,
    ) -> ClientResult<Branch>;
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
pub trait GalleryApi: Send + Sync {
    async fn list(&self, branch_id: Option<i64>) -> ClientResult<Vec<Gallery>>;
    async fn get(&self, id: i64) -> ClientResult<Gallery>;
    async fn create(&self, input: &GalleryInput) -> ClientResult<Gallery>;
    async fn update(&self, id: i64, update: &GalleryUpdate) -> ClientResult<Gallery>;
    async fn delete(&self, id: i64) -> ClientResult<()>;
    async fn upload(
        &self,
        request: &GalleryUpload,
        file: &ImageAttachment,
    ) -> ClientResult<Gallery>;
    async fn delete_from_host(&self, image_url: &str) -> ClientResult<()>;
}

#[async_trait]
pub trait EnquiryApi: Send + Sync {
    async fn list(&self, branch_id: Option<i64>) -> ClientResult<Vec<Enquiry>>;
    async fn get(&self, id: i64) -> ClientResult<Enquiry>;
    async fn create(&self, input: &EnquiryInput) -> ClientResult<Enquiry>;
    async fn update(&self, id: i64, update: &EnquiryUpdate) -> ClientResult<Enquiry>;
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl BranchApi for BranchService {
    async fn list(&self) -> ClientResult<Vec<Branch>> {
        BranchService::list(self).await
    }
    async fn get(&self, id: i64) -> ClientResult<Branch> {
        BranchService::get(self, id).await
    }
    async fn create(
        &self,
        input: &BranchInput,
        thumbnail: Option<&ImageAttachment>,
    ) -> ClientResult<Branch> {
        BranchService::create(self, input, thumbnail).await
    }
    async fn update(
        &self,
        id: i64,
        update: &BranchUpdate,
        thumbnail: Option<&ImageAttachment>,
    ) -> ClientResult<Branch> {
        BranchService::update(self, id, update, thumbnail).await
    }
    async fn delete(&self, id: i64) -> ClientResult<()> {
        BranchService::delete(self, id).await
    }
}

#[async_trait]
impl GalleryApi for GalleryService {
    async fn list(&self, branch_id: Option<i64>) -> ClientResult<Vec<Gallery>> {
        GalleryService::list(self, branch_id).await
    }
    async fn get(&self, id: i64) -> ClientResult<Gallery> {
        GalleryService::get(self, id).await
    }
    async fn create(&self, input: &GalleryInput) -> ClientResult<Gallery> {
        GalleryService::create(self, input).await
    }
    async fn update(&self, id: i64, update: &GalleryUpdate) -> ClientResult<Gallery> {
        GalleryService::update(self, id, update).await
    }
    async fn delete(&self, id: i64) -> ClientResult<()> {
        GalleryService::delete(self, id).await
    }
    async fn upload(
        &self,
        request: &GalleryUpload,
        file: &ImageAttachment,
    ) -> ClientResult<Gallery> {
        GalleryService::upload(self, request, file).await
    }
    async fn delete_from_host(&self, image_url: &str) -> ClientResult<()> {
        GalleryService::delete_from_host(self, image_url).await
    }
}

#[async_trait]
impl EnquiryApi for EnquiryService {
    async fn list(&self, branch_id: Option<i64>) -> ClientResult<Vec<Enquiry>> {
        EnquiryService::list(self, branch_id).await
    }
    async fn get(&self, id: i64) -> ClientResult<Enquiry> {
        EnquiryService::get(self, id).await
    }
    async fn create(&self, input: &EnquiryInput) -> ClientResult<Enquiry> {
        EnquiryService::create(self, input).await
    }
    async fn update(&self, id: i64, update: &EnquiryUpdate) -> ClientResult<Enquiry> {
        EnquiryService::update(self, id, update).await
    }
    async fn delete(&self, id: i64) -> ClientResult<()> {
        EnquiryService::delete(self, id).await
    }
}
