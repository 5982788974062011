//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → request.rs (request ID, X-Code / X-Format extraction)
//!     → handler.rs → Responder (format, code, cached body)
//!     → response.rs (status, Content-Type, body)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{ControlHeaders, UuidRequestId, X_CODE, X_FORMAT, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer, LIVENESS_PATH};
