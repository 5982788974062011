//! Per-request orchestration: control values in, error response out.
//!
//! ```text
//! ReadHeaders → ResolveFormat → ResolveCode → ResolveBody → WriteResponse
//!                                              ├─ cache hit
//!                                              └─ cache miss → store (blocking pool)
//! ```
//!
//! Every step absorbs its own failures into a default, so a request always
//! ends with the requested (or default) status, a content type and a body.

use std::sync::Arc;

use bytes::Bytes;

use crate::cache::{CacheKey, ResponseCache};
use crate::code::ErrorCode;
use crate::config::ResponderConfig;
use crate::negotiation::FormatResolver;
use crate::observability::metrics;
use crate::store::ErrorPages;

/// Everything needed to write one error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub content_type: String,
    pub body: Bytes,
}

/// Shared, cheaply clonable request orchestrator.
#[derive(Debug, Clone)]
pub struct Responder {
    resolver: Arc<FormatResolver>,
    pages: Arc<ErrorPages>,
    cache: ResponseCache,
}

impl Responder {
    pub fn new(resolver: FormatResolver, pages: ErrorPages, cache: ResponseCache) -> Self {
        Self {
            resolver: Arc::new(resolver),
            pages: Arc::new(pages),
            cache,
        }
    }

    pub fn from_config(config: &ResponderConfig) -> Self {
        let pages = ErrorPages::new(&config.pages.root)
            .with_default_body(config.pages.default_body.clone());
        Self::new(
            FormatResolver::default(),
            pages,
            ResponseCache::from_config(&config.cache),
        )
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Build the response for the raw `X-Format` and `X-Code` values.
    pub async fn respond(&self, format: Option<&str>, code: Option<&str>) -> ErrorResponse {
        let representation = self.resolver.resolve(format.unwrap_or_default());
        let code = ErrorCode::parse_or_default(code);
        let key = CacheKey::new(representation.content_type(), code);

        let pages = Arc::clone(&self.pages);
        let rep = representation.clone();
        let loaded = self
            .cache
            .get_or_load_blocking(key, move || {
                let resolved = pages.load(&rep, code);
                metrics::record_body_source(resolved.source.label());
                resolved.bytes
            })
            .await;

        let body = loaded.unwrap_or_else(|e| {
            tracing::error!(error = %e, code = %code, "Error page load task failed");
            metrics::record_body_source("default");
            self.pages.default_body()
        });

        metrics::record_response(code.value());

        ErrorResponse {
            code,
            content_type: representation.content_type().to_string(),
            body,
        }
    }
}
