//! Content negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! X-Format header value
//!     → resolver.rs (first list entry, parse media type)
//!     → media_types.rs (ordered extension tables, longest candidate)
//!     → Representation { extension, content_type }
//! ```
//!
//! # Design Decisions
//! - Never fails: every dead end resolves to text/html / .html
//! - Parameters (charset, q) are ignored for lookup

pub mod media_types;
pub mod resolver;

pub use media_types::{ExtensionTable, RegistryTable, StaticTable};
pub use resolver::{FormatResolver, Representation, DEFAULT_CONTENT_TYPE, DEFAULT_EXTENSION};
