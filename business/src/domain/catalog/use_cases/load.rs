use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    /// Fetches the full collection and replaces the session's copy.
    /// Returns the number of products loaded.
    async fn execute(&self) -> Result<usize, ProductError>;
}
