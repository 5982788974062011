//! Response construction.
//!
//! # Responsibilities
//! - Turn a resolved error response into an HTTP response
//! - Write status, `Content-Type` and body exactly once each

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::negotiation::DEFAULT_CONTENT_TYPE;
use crate::responder::ErrorResponse;

/// Body of the liveness endpoint.
pub const LIVENESS_BODY: &str = "ok";

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(&self.content_type).unwrap_or_else(|_| {
            tracing::warn!(
                content_type = %self.content_type,
                "Content type is not a valid header value, using default"
            );
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE)
        });

        let status = self.code.try_status().unwrap_or_else(|| {
            tracing::warn!(
                code = %self.code,
                "Status code cannot be sent on a status line, using 404"
            );
            StatusCode::NOT_FOUND
        });

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
        response
    }
}

/// Fixed liveness response.
pub fn build_liveness_response() -> Response {
    (StatusCode::OK, LIVENESS_BODY).into_response()
}
