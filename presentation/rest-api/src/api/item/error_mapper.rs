use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ItemError::InvalidInput => StatusCode::BAD_REQUEST,
            ItemError::NotFound | ItemError::ShoppingListNotFound => StatusCode::NOT_FOUND,
            ItemError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ErrorResponse::json(self.to_string()))
    }
}
