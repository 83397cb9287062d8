use poem::{Error, IntoResponse, Response, http::StatusCode, web};
use poem_openapi::{Object, payload::Json};
use serde_json::json;
use uuid::Uuid;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Parses a path identifier, answering with `message` when it is not a UUID.
pub fn parse_id(raw: &str, message: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::json(message))
}

/// Renders errors raised outside the handlers (unknown routes, unparseable
/// bodies, missing fields) with the same `{"error": ...}` body.
pub async fn render_framework_error(err: Error) -> Response {
    let status = err.status();
    let message = if status.is_server_error() {
        tracing::error!(error = %err, "unhandled request error");
        "internal_error".to_string()
    } else {
        err.to_string()
    };

    web::Json(json!({ "error": message }))
        .with_status(status)
        .into_response()
}
