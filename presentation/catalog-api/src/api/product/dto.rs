use poem_openapi::Object;

use business::domain::product::model::{Product, ProductPatch};

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product title (cannot be empty)
    pub title: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Thumbnail image URL (cannot be empty)
    pub thumbnail: String,
}

/// Fields left out are not changed.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            title: request.title,
            description: request.description,
            thumbnail: request.thumbnail,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Average rating, 0 to 5
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Gallery image URLs
    #[oai(skip_serializing_if_is_none)]
    pub images: Option<Vec<String>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title,
            description: product.description,
            thumbnail: product.thumbnail,
            rating: product.rating,
            brand: product.brand,
            category: product.category,
            price: product.price,
            images: product.images,
        }
    }
}
