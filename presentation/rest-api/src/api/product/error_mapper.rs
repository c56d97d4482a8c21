use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::FreeProduct => (StatusCode::BAD_REQUEST, "FreeProductError"),
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::EmptyStore => (StatusCode::NOT_FOUND, "EmptyStoreError"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
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
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_not_found_to_404_with_id_in_message() {
        let (status, json) = ProductError::NotFound(17).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
        assert!(json.0.message.contains("17"));
    }

    #[test]
    fn should_map_free_product_to_400() {
        let (status, json) = ProductError::FreeProduct.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "FreeProductError");
    }

    #[test]
    fn should_map_blank_name_to_validation_error() {
        let (status, json) = ProductError::NameEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
    }

    #[test]
    fn should_map_empty_store_to_404() {
        let (status, json) = ProductError::EmptyStore.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "EmptyStoreError");
    }

    #[test]
    fn should_hide_repository_details_behind_500() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
