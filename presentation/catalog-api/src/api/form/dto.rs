use poem_openapi::{Enum, Object};

use business::domain::catalog::form::{FormField, FormMode, ProductForm};
use business::domain::catalog::use_cases::form_surface::FormFieldsParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum FormModeDto {
    #[oai(rename = "create")]
    Create,
    #[oai(rename = "edit")]
    Edit,
}

#[derive(Debug, Clone, Object)]
pub struct OpenFormRequest {
    /// `create` for an empty add form, `edit` for the selected product
    pub mode: FormModeDto,
}

/// Typed field values. Fields left out keep what was typed before.
#[derive(Debug, Clone, Object)]
pub struct FormFieldsRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
}

impl From<FormFieldsRequest> for FormFieldsParams {
    fn from(request: FormFieldsRequest) -> Self {
        FormFieldsParams {
            title: request.title,
            description: request.description,
            thumbnail: request.thumbnail,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FormResponse {
    pub mode: FormModeDto,
    /// Product being edited, absent for the add form
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<u64>,
    pub heading: String,
    /// Submit button text, e.g. "Adding..." while a submission is in flight
    pub submit_label: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub submitting: bool,
    /// Message from the last failed submission
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<ProductForm> for FormResponse {
    fn from(form: ProductForm) -> Self {
        let (mode, product_id) = match form.mode() {
            FormMode::Create => (FormModeDto::Create, None),
            FormMode::Edit(id) => (FormModeDto::Edit, Some(id.value())),
        };

        Self {
            mode,
            product_id,
            heading: form.heading().to_string(),
            submit_label: form.submit_label().to_string(),
            title: form.field(FormField::Title).to_string(),
            description: form.field(FormField::Description).to_string(),
            thumbnail: form.field(FormField::Thumbnail).to_string(),
            submitting: form.is_busy(),
            error: form.error().map(str::to_string),
        }
    }
}
