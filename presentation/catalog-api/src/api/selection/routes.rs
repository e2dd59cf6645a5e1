use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::detail::DetailSurface;
use business::domain::catalog::use_cases::detail_surface::{
    DetailSurfaceUseCase, ImageStep, SelectProductParams,
};
use business::domain::product::errors::ProductError;
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::form::dto::FormFieldsRequest;
use crate::api::selection::dto::DetailResponse;
use crate::api::tags::ApiTags;

pub struct SelectionApi {
    detail_use_case: Arc<dyn DetailSurfaceUseCase>,
}

impl SelectionApi {
    pub fn new(detail_use_case: Arc<dyn DetailSurfaceUseCase>) -> Self {
        Self { detail_use_case }
    }
}

impl DetailStateResponse {
    fn from_result(result: Result<DetailSurface, ProductError>) -> Self {
        match result {
            Ok(detail) => DetailStateResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DetailStateResponse::BadRequest(json),
                    404 => DetailStateResponse::NotFound(json),
                    409 => DetailStateResponse::Conflict(json),
                    _ => DetailStateResponse::BadGateway(json),
                }
            }
        }
    }
}

/// Selected product API
///
/// Detail view of one product with an image carousel, inline editing and
/// delete. Save and delete failures leave the surface as it was.
#[OpenApi]
impl SelectionApi {
    /// Select a product
    #[oai(path = "/catalog/selection/:id", method = "post", tag = "ApiTags::Selection")]
    async fn select(&self, id: Path<u64>) -> DetailStateResponse {
        DetailStateResponse::from_result(
            self.detail_use_case
                .select(SelectProductParams {
                    id: ProductId::new(id.0),
                })
                .await,
        )
    }

    /// Get the selected product's detail view
    #[oai(path = "/catalog/selection", method = "get", tag = "ApiTags::Selection")]
    async fn current(&self) -> DetailStateResponse {
        DetailStateResponse::from_result(
            self.detail_use_case
                .current()
                .await
                .ok_or(ProductError::NoSurfaceOpen),
        )
    }

    /// Switch between viewing and editing
    ///
    /// Leaving edit mode discards unsaved changes.
    #[oai(
        path = "/catalog/selection/edit-toggle",
        method = "post",
        tag = "ApiTags::Selection"
    )]
    async fn toggle_edit(&self) -> DetailStateResponse {
        DetailStateResponse::from_result(self.detail_use_case.toggle_edit().await)
    }

    /// Type into the edit fields
    #[oai(path = "/catalog/selection/fields", method = "put", tag = "ApiTags::Selection")]
    async fn edit_fields(&self, body: Json<FormFieldsRequest>) -> DetailStateResponse {
        DetailStateResponse::from_result(self.detail_use_case.edit_fields(body.0.into()).await)
    }

    /// Show the next image
    #[oai(
        path = "/catalog/selection/image/next",
        method = "post",
        tag = "ApiTags::Selection"
    )]
    async fn next_image(&self) -> DetailStateResponse {
        DetailStateResponse::from_result(self.detail_use_case.step_image(ImageStep::Next).await)
    }

    /// Show the previous image
    #[oai(
        path = "/catalog/selection/image/prev",
        method = "post",
        tag = "ApiTags::Selection"
    )]
    async fn prev_image(&self) -> DetailStateResponse {
        DetailStateResponse::from_result(
            self.detail_use_case.step_image(ImageStep::Previous).await,
        )
    }

    /// Save the edits
    #[oai(path = "/catalog/selection/save", method = "post", tag = "ApiTags::Selection")]
    async fn save(&self) -> DetailStateResponse {
        DetailStateResponse::from_result(self.detail_use_case.save().await)
    }

    /// Delete the selected product
    #[oai(path = "/catalog/selection/delete", method = "post", tag = "ApiTags::Selection")]
    async fn delete(&self) -> DeleteSelectionResponse {
        match self.detail_use_case.delete().await {
            Ok(()) => DeleteSelectionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteSelectionResponse::NotFound(json),
                    409 => DeleteSelectionResponse::Conflict(json),
                    _ => DeleteSelectionResponse::BadGateway(json),
                }
            }
        }
    }

    /// Close the detail view
    #[oai(path = "/catalog/selection", method = "delete", tag = "ApiTags::Selection")]
    async fn close(&self) -> DeleteSelectionResponse {
        self.detail_use_case.close().await;
        DeleteSelectionResponse::NoContent
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DetailStateResponse {
    #[oai(status = 200)]
    Ok(Json<DetailResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteSelectionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
