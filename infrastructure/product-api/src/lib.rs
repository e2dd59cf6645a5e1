mod catalog_service;
mod client;

pub use catalog_service::ProductCatalogHttp;
pub use client::ProductApiClient;
