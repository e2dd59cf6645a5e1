use serde::{Deserialize, Serialize};

/// Identifier of a product within the catalog collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Remote calls the catalog issues against the product service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOperation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl CatalogOperation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            CatalogOperation::Fetch => "Failed to fetch products",
            CatalogOperation::Create => "Failed to add product",
            CatalogOperation::Update => "Failed to update product",
            CatalogOperation::Delete => "Failed to delete product",
        }
    }
}

impl std::fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogOperation::Fetch => write!(f, "fetch"),
            CatalogOperation::Create => write!(f, "create"),
            CatalogOperation::Update => write!(f, "update"),
            CatalogOperation::Delete => write!(f, "delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_advance_product_id() {
        assert_eq!(ProductId::new(5).next(), ProductId::new(6));
    }

    #[test]
    fn should_deserialize_product_id_from_bare_number() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
