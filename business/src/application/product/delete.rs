use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::session::SessionHandle;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::service::ProductCatalogService;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::CatalogOperation;

pub struct DeleteProductUseCaseImpl {
    pub service: Arc<dyn ProductCatalogService>,
    pub session: SessionHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        if !self.session.read(|s| s.store().contains(params.id)) {
            return Err(ProductError::NotFound);
        }

        self.service.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", params.id, e));
            ProductError::remote(CatalogOperation::Delete, e)
        })?;

        if self.session.write(|s| s.remove(params.id)).is_none() {
            self.logger.warn(&format!(
                "Product {} was already gone when its delete completed",
                params.id
            ));
        }

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
