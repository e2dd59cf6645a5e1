use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_CREATE_PATH: &str = "/products";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote product service configuration
#[derive(Debug, Clone)]
pub struct ProductApiConfig {
    pub base_url: String,
    pub create_path: String,
    pub timeout: Duration,
}

impl ProductApiConfig {
    /// Load remote service configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCT_API_BASE_URL: Service root (default: "https://dummyjson.com")
    /// - PRODUCT_API_CREATE_PATH: Path new products are posted to (default: "/products")
    /// - PRODUCT_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PRODUCT_API_BASE_URL").ok(),
            env::var("PRODUCT_API_CREATE_PATH").ok(),
            env::var("PRODUCT_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(
        base_url: Option<String>,
        create_path: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        let timeout_secs = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            create_path: create_path.unwrap_or_else(|| DEFAULT_CREATE_PATH.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
