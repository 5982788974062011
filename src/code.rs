//! The status code requested by the upstream proxy.

use std::fmt;
use std::num::ParseIntError;

use axum::http::StatusCode;
use thiserror::Error;

/// Why an `X-Code` value could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("no status code supplied")]
    Missing,

    #[error("status code {value:?} is not a number: {source}")]
    NotANumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// A status code to answer with.
///
/// Any non-negative integer is kept as given and drives the page lookup
/// (`1000.html`, then `1xx.html`). Only the status line is restricted to what
/// HTTP can carry; see [`ErrorCode::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(u32);

impl ErrorCode {
    /// Used when the requested code is absent or malformed.
    pub const DEFAULT: ErrorCode = ErrorCode(404);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Parse a raw header value.
    pub fn parse(raw: Option<&str>) -> Result<Self, CodeError> {
        let value = raw.map(str::trim).ok_or(CodeError::Missing)?;
        let code = value.parse::<u32>().map_err(|source| CodeError::NotANumber {
            value: value.to_string(),
            source,
        })?;
        Ok(Self(code))
    }

    /// Parse a raw header value, logging and substituting
    /// [`ErrorCode::DEFAULT`] on failure.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        Self::parse(raw).unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                code = %Self::DEFAULT,
                "Unexpected error reading return code, using default"
            );
            Self::DEFAULT
        })
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Leading decimal digit, e.g. `'5'` for 503.
    pub fn class_digit(self) -> char {
        self.to_string().chars().next().unwrap_or('0')
    }

    /// The status line for this code, if one can be written (100 to 999).
    pub fn try_status(self) -> Option<StatusCode> {
        u16::try_from(self.0)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
    }

    /// The status line to send. Codes with no valid status line are sent as
    /// 404 Not Found.
    pub fn status(self) -> StatusCode {
        self.try_status().unwrap_or(StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
