use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::model::{Product, ProductDraft, ProductPatch, RemoteProduct};
use super::value_objects::ProductId;

/// Port for the remote product collection.
///
/// Every call is independent and all-or-nothing; any transport failure or
/// non-success status is reported as a [`ServiceError`].
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;
    async fn create(&self, draft: &ProductDraft) -> Result<RemoteProduct, ServiceError>;
    async fn update(&self, id: ProductId, patch: &ProductPatch)
    -> Result<RemoteProduct, ServiceError>;
    async fn delete(&self, id: ProductId) -> Result<(), ServiceError>;
}
