//! Request handlers.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::http::request::ControlHeaders;
use crate::http::response::build_liveness_response;
use crate::http::server::AppState;

/// Serves the custom error page selected by `X-Code` and `X-Format`.
pub async fn error_page_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let control = ControlHeaders::from_headers(&headers);

    tracing::debug!(
        code = ?control.code,
        format = ?control.format,
        "Resolving error response"
    );

    state
        .responder
        .respond(control.format.as_deref(), control.code.as_deref())
        .await
        .into_response()
}

/// Liveness probe; independent of the error page machinery.
pub async fn liveness_handler() -> Response {
    build_liveness_response()
}
