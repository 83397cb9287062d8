use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ShoppingListError::InvalidInput => StatusCode::BAD_REQUEST,
            ShoppingListError::NotFound => StatusCode::NOT_FOUND,
            ShoppingListError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ErrorResponse::json(self.to_string()))
    }
}
