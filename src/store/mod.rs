//! Error page store.
//!
//! # Data Flow
//! ```text
//! (Representation, ErrorCode)
//!     → pages.rs: {root}/{code}{ext}
//!     → pages.rs: {root}/{digit}xx{ext}
//!     → literal default body
//!     → source.rs performs each read
//! ```
//!
//! # Design Decisions
//! - Every failed read is logged and skipped; the store always answers
//! - Reads are blocking; callers run them off the async workers
//! - Bytes are returned opaquely, never inspected

pub mod pages;
pub mod source;

pub use pages::{BodySource, ErrorPages, Lookup, ResolvedBody, DEFAULT_BODY};
pub use source::{FileSource, FsSource};
