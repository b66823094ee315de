// File: crates/chart-core/src/error.rs
// Summary: Error types for input validation, surfaces and configuration.

use thiserror::Error;

/// Failures raised by a drawing surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("drawing surface unavailable: {0}")]
    Unavailable(String),
    #[error("surface cannot create gradients")]
    GradientUnsupported,
    #[error("encode PNG failed")]
    Encode,
}

/// Failures raised while turning numeric input into a chart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("{what} is empty")]
    Empty { what: &'static str },

    #[error("{what} has {found} values, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{what}[{index}] is not finite")]
    NonFinite { what: &'static str, index: usize },

    #[error("x must be strictly increasing, violated at index {index}")]
    NotIncreasing { index: usize },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response is missing `{0}`")]
    MissingField(&'static str),

    #[error("computation failed: {0}")]
    Unsuccessful(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
