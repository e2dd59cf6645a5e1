use async_trait::async_trait;

use crate::domain::catalog::form::ProductForm;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Field edits for an open form. `None` leaves a field as typed.
#[derive(Debug, Clone, Default)]
pub struct FormFieldsParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

#[async_trait]
pub trait FormSurfaceUseCase: Send + Sync {
    /// Opens an empty add form.
    async fn open_create(&self) -> ProductForm;
    /// Opens the edit form pre-filled from the selected product.
    async fn open_edit(&self) -> Result<ProductForm, ProductError>;
    async fn edit_fields(&self, params: FormFieldsParams) -> Result<ProductForm, ProductError>;
    /// Sends the form to the remote service. On success the form closes and
    /// the saved product is returned; on failure it stays open with a message.
    async fn submit(&self) -> Result<Product, ProductError>;
    async fn current(&self) -> Option<ProductForm>;
    async fn close(&self);
}
