//! Error types for typed coercion of HOCON values.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors raised when a value's text does not match the literal grammar the
/// caller asked for.
///
/// Shape queries (`is_object`, `get_child_object`, ...) never produce these;
/// only the scalar accessors and the JSON bridge do.
#[derive(Error, Debug)]
pub enum HoconError {
    /// Text was not one of `on`, `off`, `true`, `false`.
    #[error("Unknown boolean format: {0}")]
    InvalidBoolean(String),

    /// Text was not a base-10 integer of the requested width.
    #[error("invalid integer '{text}': {source}")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// Text was not a decimal floating-point number.
    #[error("invalid float '{text}': {source}")]
    InvalidFloat {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// A duration magnitude below zero.
    #[error("Expected a positive value instead of {0}")]
    NegativeDuration(String),

    /// Text matched neither the unit grammar, `infinite`, nor a bare number.
    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    /// The duration does not fit in 64-bit nanoseconds.
    #[error("duration out of range: {0}")]
    DurationOutOfRange(String),

    /// `infinite` was given where the caller requires a finite duration.
    #[error("infinite time duration not allowed")]
    InfiniteNotAllowed,

    /// The input handed to the JSON bridge was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout hocon-value.
pub type Result<T> = std::result::Result<T, HoconError>;
