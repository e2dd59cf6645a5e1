use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::session::SessionHandle;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

/// Reads from the session copy; the remote service is never consulted.
pub struct GetProductByIdUseCaseImpl {
    pub session: SessionHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .debug(&format!("Fetching product by id: {}", params.id));
        self.session
            .read(|s| s.store().get(params.id).cloned())
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::session::CatalogSession;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;

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
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_present_and_not_found_otherwise() {
        let mut session = CatalogSession::new();
        session.load(vec![Product::from_fields(
            ProductId::new(4),
            NewProduct {
                title: "Watch".to_string(),
                ..Default::default()
            },
        )]);

        let use_case = GetProductByIdUseCaseImpl {
            session: SessionHandle::new(session),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(4),
            })
            .await
            .unwrap();
        assert_eq!(found.title, "Watch");

        let missing = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(5),
            })
            .await;
        assert!(matches!(missing, Err(ProductError::NotFound)));
    }
}
