use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::session::SessionHandle;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product, ProductDraft};
use crate::domain::product::service::ProductCatalogService;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::CatalogOperation;

pub struct CreateProductUseCaseImpl {
    pub service: Arc<dyn ProductCatalogService>,
    pub session: SessionHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        let draft = ProductDraft::new(params.title, params.description, params.thumbnail)?;

        let echo = self.service.create(&draft).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to create product '{}': {}", draft.title, e));
            ProductError::remote(CatalogOperation::Create, e)
        })?;

        if let Some(remote_id) = echo.id {
            self.logger
                .debug(&format!("Service assigned id {}, using a local id", remote_id));
        }

        let fields = NewProduct::from_echo(draft, echo);
        let product = self.session.write(|session| session.insert(fields));

        self.logger.info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}
