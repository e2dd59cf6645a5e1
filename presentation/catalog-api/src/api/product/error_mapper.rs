use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::TitleEmpty
            | ProductError::DescriptionEmpty
            | ProductError::ThumbnailEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::SubmissionInFlight | ProductError::NoSurfaceOpen => {
                (StatusCode::CONFLICT, "Conflict")
            }
            ProductError::Remote { .. } => (StatusCode::BAD_GATEWAY, "ServiceError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::ServiceError;
    use business::domain::product::value_objects::CatalogOperation;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ProductError::TitleEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "product.title_empty");
    }

    #[test]
    fn should_map_surface_conflicts_to_conflict() {
        let (status, _) = ProductError::SubmissionInFlight.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        let (status, _) = ProductError::NoSurfaceOpen.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_remote_failures_to_bad_gateway() {
        let err = ProductError::remote(CatalogOperation::Delete, ServiceError::unreachable());
        let (status, json) = err.into_error_response();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.name, "ServiceError");
    }
}
