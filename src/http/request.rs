//! Request inspection.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Extract the control headers the upstream proxy sets
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An incoming `x-request-id` is kept, not replaced
//! - Control headers that are not valid text are treated as absent

use axum::http::{HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Header carrying the status code to answer with.
pub const X_CODE: &str = "x-code";

/// Header carrying the desired response format.
pub const X_FORMAT: &str = "x-format";

/// Makes UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request metadata the responder acts on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlHeaders {
    pub format: Option<String>,
    pub code: Option<String>,
}

impl ControlHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            format: header_str(headers, X_FORMAT),
            code: header_str(headers, X_CODE),
        }
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?;
    match value.to_str() {
        Ok(s) => Some(s.to_string()),
        Err(_) => {
            tracing::warn!(header = name, "Ignoring non-text control header");
            None
        }
    }
}

/// The request ID assigned to a request, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
