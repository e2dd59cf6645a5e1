use async_trait::async_trait;

use crate::domain::catalog::projection::SortMode;
use crate::domain::catalog::session::CatalogSnapshot;

/// Changes to the list view. `None` leaves that input as it is.
#[derive(Debug, Clone, Default)]
pub struct BrowseCatalogParams {
    pub search: Option<String>,
    pub sort: Option<SortMode>,
    pub page: Option<usize>,
}

#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self, params: BrowseCatalogParams) -> CatalogSnapshot;
}
