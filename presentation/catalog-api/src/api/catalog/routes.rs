use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;

use crate::api::catalog::dto::{CatalogResponse, ReloadResponse, ViewRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    load_use_case: Arc<dyn LoadCatalogUseCase>,
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(
        load_use_case: Arc<dyn LoadCatalogUseCase>,
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    ) -> Self {
        Self {
            load_use_case,
            browse_use_case,
        }
    }
}

/// Catalog list API
///
/// The list view is computed from the session collection on every call:
/// search filter, then sort, then an 8-per-page slice.
#[OpenApi]
impl CatalogApi {
    /// Get the catalog view
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self) -> Json<CatalogResponse> {
        let snapshot = self
            .browse_use_case
            .execute(BrowseCatalogParams::default())
            .await;
        Json(snapshot.into())
    }

    /// Change search, sort or page
    #[oai(path = "/catalog/view", method = "put", tag = "ApiTags::Catalog")]
    async fn update_view(&self, body: Json<ViewRequest>) -> Json<CatalogResponse> {
        let snapshot = self.browse_use_case.execute(body.0.into()).await;
        Json(snapshot.into())
    }

    /// Reload the collection from the remote product service
    ///
    /// On failure the previous collection is kept.
    #[oai(path = "/catalog/reload", method = "post", tag = "ApiTags::Catalog")]
    async fn reload(&self) -> ReloadCatalogResponse {
        match self.load_use_case.execute().await {
            Ok(product_count) => ReloadCatalogResponse::Ok(Json(ReloadResponse { product_count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ReloadCatalogResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReloadCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<ReloadResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
