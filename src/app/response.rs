use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

const SERIALIZE_FAILURE: &str = r#"{"error":"Failed to serialize response"}"#;

/// A JSON reply with an explicit status, `Content-Type` and exact `Content-Length`.
pub struct JsonBody<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        let JsonBody(status, value) = self;
        match serde_json::to_vec(&value) {
            Ok(bytes) => json_bytes(status, bytes),
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                json_bytes(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERIALIZE_FAILURE.as_bytes().to_vec(),
                )
            }
        }
    }
}

fn json_bytes(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (CONTENT_LENGTH, HeaderValue::from(bytes.len())),
        ],
        bytes,
    )
        .into_response()
}
