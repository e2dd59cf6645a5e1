use std::time::Duration;

use business::domain::product::value_objects::ProductId;
use reqwest::Client;

/// Shared HTTP client configuration for the remote product service.
pub struct ProductApiClient {
    pub client: Client,
    pub base_url: String,
    pub create_path: String,
}

impl ProductApiClient {
    /// Fails when the TLS backend or system configuration cannot be loaded.
    pub fn new(
        base_url: String,
        create_path: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            create_path: normalize_path(&create_path),
        })
    }

    /// Returns the collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the endpoint new products are posted to.
    pub fn create_url(&self) -> String {
        format!("{}{}", self.base_url, self.create_path)
    }

    /// Returns the endpoint for a single product.
    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
