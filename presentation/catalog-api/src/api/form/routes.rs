use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::form_surface::FormSurfaceUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::form::dto::{FormFieldsRequest, FormModeDto, FormResponse, OpenFormRequest};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct FormApi {
    form_use_case: Arc<dyn FormSurfaceUseCase>,
}

impl FormApi {
    pub fn new(form_use_case: Arc<dyn FormSurfaceUseCase>) -> Self {
        Self { form_use_case }
    }
}

/// Add/edit form API
///
/// One form is open at a time. Opening it in `create` mode clears the
/// current selection.
#[OpenApi]
impl FormApi {
    /// Get the open form
    #[oai(path = "/catalog/form", method = "get", tag = "ApiTags::Form")]
    async fn get_form(&self) -> FormStateResponse {
        match self.form_use_case.current().await {
            Some(form) => FormStateResponse::Ok(Json(form.into())),
            None => FormStateResponse::NotFound(Json(no_form())),
        }
    }

    /// Open the form
    #[oai(path = "/catalog/form", method = "post", tag = "ApiTags::Form")]
    async fn open_form(&self, body: Json<OpenFormRequest>) -> FormStateResponse {
        let result = match body.0.mode {
            FormModeDto::Create => Ok(self.form_use_case.open_create().await),
            FormModeDto::Edit => self.form_use_case.open_edit().await,
        };

        match result {
            Ok(form) => FormStateResponse::Ok(Json(form.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FormStateResponse::Conflict(json)
            }
        }
    }

    /// Type into the form fields
    #[oai(path = "/catalog/form", method = "put", tag = "ApiTags::Form")]
    async fn edit_form(&self, body: Json<FormFieldsRequest>) -> FormStateResponse {
        match self.form_use_case.edit_fields(body.0.into()).await {
            Ok(form) => FormStateResponse::Ok(Json(form.into())),
            Err(_) => FormStateResponse::NotFound(Json(no_form())),
        }
    }

    /// Close the form without submitting
    #[oai(path = "/catalog/form", method = "delete", tag = "ApiTags::Form")]
    async fn close_form(&self) -> CloseFormResponse {
        self.form_use_case.close().await;
        CloseFormResponse::NoContent
    }

    /// Submit the form
    ///
    /// On success the form closes and the saved product is returned. On
    /// failure the form stays open and carries the error message.
    #[oai(path = "/catalog/form/submit", method = "post", tag = "ApiTags::Form")]
    async fn submit_form(&self) -> SubmitFormResponse {
        match self.form_use_case.submit().await {
            Ok(product) => SubmitFormResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitFormResponse::BadRequest(json),
                    404 => SubmitFormResponse::NotFound(json),
                    409 => SubmitFormResponse::Conflict(json),
                    _ => SubmitFormResponse::BadGateway(json),
                }
            }
        }
    }
}

fn no_form() -> ErrorResponse {
    ErrorResponse {
        name: "NotFound".to_string(),
        message: "form.not_open".to_string(),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FormStateResponse {
    #[oai(status = 200)]
    Ok(Json<FormResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CloseFormResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitFormResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
