use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::session::SessionHandle;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductCatalogService;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::CatalogOperation;

pub struct UpdateProductUseCaseImpl {
    pub service: Arc<dyn ProductCatalogService>,
    pub session: SessionHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.patch.validate()?;

        // Verify product exists in the session
        if !self.session.read(|s| s.store().contains(params.id)) {
            return Err(ProductError::NotFound);
        }

        let echo = self
            .service
            .update(params.id, &params.patch)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to update product {}: {}", params.id, e));
                ProductError::remote(CatalogOperation::Update, e)
            })?;

        // The request is applied first so fields the service did not echo
        // still take the submitted values; echoed fields then win.
        let updated = self.session.write(|session| {
            session.apply_update(params.id, &params.patch)?;
            session.apply_update(params.id, &echo.fields)
        });

        match updated {
            Some(product) => {
                self.logger.info(&format!("Product updated: {}", product.id));
                Ok(product)
            }
            None => {
                self.logger.warn(&format!(
                    "Product {} was removed while its update was in flight",
                    params.id
                ));
                Err(ProductError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::session::CatalogSession;
    use crate::domain::errors::ServiceError;
    use crate::domain::product::model::{NewProduct, ProductDraft, ProductPatch, RemoteProduct};
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub CatalogService {}

        #[async_trait]
        impl ProductCatalogService for CatalogService {
            async fn list(&self) -> Result<Vec<Product>, ServiceError>;
            async fn create(&self, draft: &ProductDraft) -> Result<RemoteProduct, ServiceError>;
            async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<RemoteProduct, ServiceError>;
            async fn delete(&self, id: ProductId) -> Result<(), ServiceError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn session() -> SessionHandle {
        let mut session = CatalogSession::new();
        session.load(vec![Product::from_fields(
            ProductId::new(1),
            NewProduct {
                title: "Old Title".to_string(),
                description: "Old description".to_string(),
                thumbnail: "old.png".to_string(),
                rating: Some(4.2),
                brand: Some("Acme".to_string()),
                ..Default::default()
            },
        )]);
        SessionHandle::new(session)
    }

    fn title_patch(title: &str) -> ProductPatch {
        ProductPatch {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn should_merge_echo_and_preserve_untouched_fields() {
        let mut service = MockCatalogService::new();
        service.expect_update().times(1).returning(|id, patch| {
            Ok(RemoteProduct {
                id: Some(id),
                fields: patch.clone(),
            })
        });
        let session = session();

        let use_case = UpdateProductUseCaseImpl {
            service: Arc::new(service),
            session: session.clone(),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                patch: title_patch("New Title"),
            })
            .await
            .unwrap();

        assert_eq!(product.title, "New Title");
        assert_eq!(product.description, "Old description");
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert_eq!(product.rating, Some(4.2));
    }

    #[tokio::test]
    async fn should_keep_submitted_values_when_echo_is_sparse() {
        let mut service = MockCatalogService::new();
        service
            .expect_update()
            .returning(|_, _| Ok(RemoteProduct::default()));

        let use_case = UpdateProductUseCaseImpl {
            service: Arc::new(service),
            session: session(),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                patch: title_patch("Submitted"),
            })
            .await
            .unwrap();

        assert_eq!(product.title, "Submitted");
    }

    #[tokio::test]
    async fn should_return_not_found_without_calling_service_for_unknown_id() {
        let mut service = MockCatalogService::new();
        service.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            service: Arc::new(service),
            session: session(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(42),
                patch: title_patch("Ghost"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_reject_update_that_blanks_title() {
        let mut service = MockCatalogService::new();
        service.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            service: Arc::new(service),
            session: session(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                patch: title_patch(""),
            })
            .await;

        assert!(matches!(result, Err(ProductError::TitleEmpty)));
    }

    #[tokio::test]
    async fn should_leave_product_unchanged_when_service_fails() {
        let mut service = MockCatalogService::new();
        service
            .expect_update()
            .returning(|_, _| Err(ServiceError::unreachable()));
        let session = session();

        let use_case = UpdateProductUseCaseImpl {
            service: Arc::new(service),
            session: session.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                patch: title_patch("New"),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Remote {
                operation: CatalogOperation::Update,
                ..
            })
        ));
        let title = session.read(|s| s.store().get(ProductId::new(1)).unwrap().title.clone());
        assert_eq!(title, "Old Title");
    }
}
