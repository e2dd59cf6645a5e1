use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::ProductId;

/// A catalog entry as held by the session.
///
/// `rating`, `brand`, `category`, `price` and `images` are display-only: the
/// catalog never edits them and passes whatever the service sent through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Product {
    /// Builds a product from fields that already carry an assigned id.
    pub fn from_fields(id: ProductId, fields: NewProduct) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            thumbnail: fields.thumbnail,
            rating: fields.rating,
            brand: fields.brand,
            category: fields.category,
            price: fields.price,
            images: fields.images,
        }
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(thumbnail) = &patch.thumbnail {
            self.thumbnail = thumbnail.clone();
        }
        if let Some(rating) = patch.rating {
            self.rating = Some(rating);
        }
        if let Some(brand) = &patch.brand {
            self.brand = Some(brand.clone());
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
        if let Some(images) = &patch.images {
            self.images = Some(images.clone());
        }
    }

    /// Images to cycle through in the detail view, if the product has any.
    pub fn gallery(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }
}

/// Product fields before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub rating: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
}

impl NewProduct {
    /// Combines what the user submitted with what the service echoed back.
    /// Echoed fields win; the echoed id is discarded.
    pub fn from_echo(draft: ProductDraft, echo: RemoteProduct) -> Self {
        let patch = echo.fields;
        Self {
            title: patch.title.unwrap_or(draft.title),
            description: patch.description.unwrap_or(draft.description),
            thumbnail: patch.thumbnail.unwrap_or(draft.thumbnail),
            rating: patch.rating,
            brand: patch.brand,
            category: patch.category,
            price: patch.price,
            images: patch.images,
        }
    }
}

impl From<ProductDraft> for NewProduct {
    fn from(draft: ProductDraft) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            thumbnail: draft.thumbnail,
            ..Default::default()
        }
    }
}

/// The three user-editable fields, validated as present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let title = title.into();
        let description = description.into();
        let thumbnail = thumbnail.into();

        if title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }
        if description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if thumbnail.trim().is_empty() {
            return Err(ProductError::ThumbnailEmpty);
        }

        Ok(Self {
            title,
            description,
            thumbnail,
        })
    }

    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            title: Some(self.title),
            description: Some(self.description),
            thumbnail: Some(self.thumbnail),
            ..Default::default()
        }
    }
}

/// A partial product. Absent fields leave the target untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == ProductPatch::default()
    }

    /// Rejects a patch that would blank out one of the required fields.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ProductError::TitleEmpty);
        }
        if self
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err(ProductError::DescriptionEmpty);
        }
        if self.thumbnail.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ProductError::ThumbnailEmpty);
        }
        Ok(())
    }
}

/// Representation returned by the remote service after a create or update.
/// The service may omit any field; only what it sends back is trusted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RemoteProduct {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(flatten)]
    pub fields: ProductPatch,
}
