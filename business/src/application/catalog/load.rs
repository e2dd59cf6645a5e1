use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::session::SessionHandle;
use crate::domain::catalog::use_cases::load::LoadCatalogUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::service::ProductCatalogService;
use crate::domain::product::value_objects::CatalogOperation;

pub struct LoadCatalogUseCaseImpl {
    pub service: Arc<dyn ProductCatalogService>,
    pub session: SessionHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Result<usize, ProductError> {
        self.logger.info("Fetching product catalog");
        self.session.write(|s| s.begin_loading());

        match self.service.list().await {
            Ok(products) => {
                let count = self.session.write(|s| {
                    s.load(products);
                    s.store().len()
                });
                self.logger.info(&format!("Loaded {} products", count));
                Ok(count)
            }
            Err(e) => {
                self.session.write(|s| s.fail_loading());
                self.logger
                    .error(&format!("Failed to fetch products: {}", e));
                Err(ProductError::remote(CatalogOperation::Fetch, e))
            }
        }
    }
}
