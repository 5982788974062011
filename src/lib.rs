//! Default backend library: custom error pages chosen by status code and
//! requested format.

// Core
pub mod cache;
pub mod code;
pub mod negotiation;
pub mod responder;
pub mod store;

// Serving
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use code::ErrorCode;
pub use config::ResponderConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use responder::{ErrorResponse, Responder};
