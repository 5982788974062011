//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses parse before anything binds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResponderConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ResponderConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The error page root directory is empty.
    #[error("pages.root must not be empty")]
    EmptyPagesRoot,

    /// The literal fallback body is empty.
    #[error("pages.default_body must not be empty")]
    EmptyDefaultBody,

    /// The listener host and port do not form a socket address.
    #[error("listener address {0:?} is not a valid socket address")]
    InvalidListenerAddress(String),

    /// The metrics endpoint address does not parse.
    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ResponderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.pages.root.trim().is_empty() {
        errors.push(ValidationError::EmptyPagesRoot);
    }

    if config.pages.default_body.is_empty() {
        errors.push(ValidationError::EmptyDefaultBody);
    }

    let bind = config.bind_address();
    if bind.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidListenerAddress(bind));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
