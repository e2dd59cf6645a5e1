use async_trait::async_trait;

use crate::domain::catalog::detail::DetailSurface;
use crate::domain::catalog::use_cases::form_surface::FormFieldsParams;
use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct SelectProductParams {
    pub id: ProductId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStep {
    Next,
    Previous,
}

#[async_trait]
pub trait DetailSurfaceUseCase: Send + Sync {
    async fn select(&self, params: SelectProductParams) -> Result<DetailSurface, ProductError>;
    async fn current(&self) -> Option<DetailSurface>;
    async fn toggle_edit(&self) -> Result<DetailSurface, ProductError>;
    async fn edit_fields(&self, params: FormFieldsParams) -> Result<DetailSurface, ProductError>;
    async fn step_image(&self, step: ImageStep) -> Result<DetailSurface, ProductError>;
    /// Saves the edit fields; back to viewing on success.
    async fn save(&self) -> Result<DetailSurface, ProductError>;
    /// Deletes the selected product and closes the surface on success.
    async fn delete(&self) -> Result<(), ProductError>;
    async fn close(&self);
}
