use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::catalog::projection::SortMode;
use business::domain::catalog::session::CatalogSnapshot;
use business::domain::catalog::use_cases::browse::BrowseCatalogParams;

use crate::api::form::dto::FormResponse;
use crate::api::product::dto::ProductResponse;
use crate::api::selection::dto::DetailResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SortModeDto {
    #[oai(rename = "default")]
    Default,
    #[oai(rename = "title")]
    Title,
    #[oai(rename = "rating")]
    Rating,
}

impl From<SortMode> for SortModeDto {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Default => SortModeDto::Default,
            SortMode::Title => SortModeDto::Title,
            SortMode::Rating => SortModeDto::Rating,
        }
    }
}

impl From<SortModeDto> for SortMode {
    fn from(dto: SortModeDto) -> Self {
        match dto {
            SortModeDto::Default => SortMode::Default,
            SortModeDto::Title => SortMode::Title,
            SortModeDto::Rating => SortMode::Rating,
        }
    }
}

/// Changes to the list view. Fields left out keep their current value.
#[derive(Debug, Clone, Object)]
pub struct ViewRequest {
    /// Case-insensitive title search; changing it returns to page 1
    #[oai(skip_serializing_if_is_none)]
    pub search: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub sort: Option<SortModeDto>,
    /// 1-based page number, clamped to the last page
    #[oai(skip_serializing_if_is_none)]
    pub page: Option<usize>,
}

impl From<ViewRequest> for BrowseCatalogParams {
    fn from(request: ViewRequest) -> Self {
        BrowseCatalogParams {
            search: request.search,
            sort: request.sort.map(SortMode::from),
            page: request.page,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    /// Size of the whole collection, ignoring the search
    pub product_count: usize,
    pub loading: bool,
    #[oai(skip_serializing_if_is_none)]
    pub loaded_at: Option<DateTime<Utc>>,
    pub search: String,
    pub sort: SortModeDto,
    pub page: usize,
    pub total_pages: usize,
    /// Products matching the search
    pub total_matches: usize,
    /// Page buttons to render
    pub pages: Vec<usize>,
    /// Products on the current page
    pub items: Vec<ProductResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub form: Option<FormResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<DetailResponse>,
}

impl From<CatalogSnapshot> for CatalogResponse {
    fn from(snapshot: CatalogSnapshot) -> Self {
        let page = snapshot.page;
        Self {
            product_count: snapshot.product_count,
            loading: snapshot.loading,
            loaded_at: snapshot.loaded_at,
            search: snapshot.search,
            sort: snapshot.sort.into(),
            page: page.page,
            total_pages: page.total_pages,
            total_matches: page.total_matches,
            pages: (1..=page.total_pages).collect(),
            items: page.items.into_iter().map(ProductResponse::from).collect(),
            form: snapshot.form.map(FormResponse::from),
            detail: snapshot
                .detail
                .filter(|d| d.is_open())
                .map(DetailResponse::from),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReloadResponse {
    /// Number of products now in the session
    pub product_count: usize,
}
