use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::session::{CatalogSnapshot, SessionHandle};
use crate::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use crate::domain::logger::Logger;

pub struct BrowseCatalogUseCaseImpl {
    pub session: SessionHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self, params: BrowseCatalogParams) -> CatalogSnapshot {
        let snapshot = self.session.write(|s| {
            // Search first: it resets the page an explicit page request then overrides.
            if let Some(search) = params.search {
                s.set_search(search);
            }
            if let Some(sort) = params.sort {
                s.set_sort(sort);
            }
            if let Some(page) = params.page {
                s.set_page(page);
            }
            s.snapshot()
        });

        self.logger.debug(&format!(
            "Catalog view: search='{}' sort={} page={}/{}",
            snapshot.search, snapshot.sort, snapshot.page.page, snapshot.page.total_pages
        ));
        snapshot
    }
}
