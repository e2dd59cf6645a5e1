use std::sync::Arc;

use logger::TracingLogger;
use product_api::{ProductApiClient, ProductCatalogHttp};

use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::detail_surface::DetailSurfaceUseCaseImpl;
use business::application::catalog::form_surface::FormSurfaceUseCaseImpl;
use business::application::catalog::load::LoadCatalogUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::catalog::session::SessionHandle;
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub load_use_case: Arc<dyn LoadCatalogUseCase>,
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub form_api: crate::api::form::routes::FormApi,
    pub selection_api: crate::api::selection::routes::SelectionApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // One catalog session for the whole process
        let session = SessionHandle::default();

        // Infrastructure adapters
        let client = ProductApiClient::new(
            config.product_api.base_url.clone(),
            config.product_api.create_path.clone(),
            config.product_api.timeout,
        )?;
        let service = Arc::new(ProductCatalogHttp::new(client));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            service: service.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            service: service.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            service: service.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let load_use_case = Arc::new(LoadCatalogUseCaseImpl {
            service,
            session: session.clone(),
            logger: logger.clone(),
        });
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let form_use_case = Arc::new(FormSurfaceUseCaseImpl {
            session: session.clone(),
            create_use_case: create_use_case.clone(),
            update_use_case: update_use_case.clone(),
            logger: logger.clone(),
        });
        let detail_use_case = Arc::new(DetailSurfaceUseCaseImpl {
            session,
            update_use_case: update_use_case.clone(),
            delete_use_case: delete_use_case.clone(),
            logger,
        });

        let catalog_api =
            crate::api::catalog::routes::CatalogApi::new(load_use_case.clone(), browse_use_case);

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        let form_api = crate::api::form::routes::FormApi::new(form_use_case);
        let selection_api = crate::api::selection::routes::SelectionApi::new(detail_use_case);

        Ok(Self {
            load_use_case,
            health_api,
            catalog_api,
            product_api,
            form_api,
            selection_api,
        })
    }
}
