//! Fixed wire responses.
//!
//! The devices implement no retry or error handling, so the intake route
//! answers every processed request with the same acknowledgement, whatever
//! happened to the payload. Anything unroutable gets an empty 404.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Literal acknowledgement body the devices expect.
pub const ACK_BODY: &str = "OK";

/// Status header some firmware checks instead of the HTTP status line.
const RESPONSE_CODE: HeaderName = HeaderName::from_static("response_code");

/// The fixed 200 acknowledgement for the intake route.
pub fn acknowledgement() -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
            (RESPONSE_CODE, HeaderValue::from_static("OK")),
            (header::CONNECTION, HeaderValue::from_static("close")),
        ],
        ACK_BODY,
    )
        .into_response()
}

/// Empty 404 for any method/path outside the intake route.
pub fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
