use super::value_objects::CatalogOperation;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.thumbnail_empty")]
    ThumbnailEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("product.submission_in_flight")]
    SubmissionInFlight,
    #[error("product.no_surface_open")]
    NoSurfaceOpen,
    #[error("product.remote_failure")]
    Remote {
        operation: CatalogOperation,
        #[source]
        source: crate::domain::errors::ServiceError,
    },
}

impl ProductError {
    pub fn remote(operation: CatalogOperation, source: crate::domain::errors::ServiceError) -> Self {
        ProductError::Remote { operation, source }
    }

    /// Short human-readable text shown inline in the originating form.
    pub fn user_message(&self) -> String {
        match self {
            ProductError::TitleEmpty => "Title is required".to_string(),
            ProductError::DescriptionEmpty => "Description is required".to_string(),
            ProductError::ThumbnailEmpty => "Thumbnail URL is required".to_string(),
            ProductError::NotFound => "Product no longer exists".to_string(),
            ProductError::SubmissionInFlight => "A submission is already in progress".to_string(),
            ProductError::NoSurfaceOpen => "Nothing to submit".to_string(),
            ProductError::Remote { operation, .. } => operation.failure_message().to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::TitleEmpty | ProductError::DescriptionEmpty | ProductError::ThumbnailEmpty
        )
    }
}
