//! # Errors
//!
//! A single error enum for the engine. Algebra errors (`DimensionMismatch`,
//! `IndexOutOfRange`) indicate programmer errors; the rest come from user input
//! and are meant to be shown as validation messages by the host.

use thiserror::Error;

use crate::config::Dimension;
use crate::model::{ShapeId, ShapeKind};

/// Everything that can go wrong inside the canvas engine.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Two operands were built under different dimensionalities.
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch { expected: Dimension, found: Dimension },

    /// A component or row/column index past the active dimension.
    #[error("index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// A vector or matrix was built from the wrong number of components or rows.
    #[error("expected {expected} components or rows, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Scale factors must be finite and strictly positive.
    #[error("invalid scale factor {0}: must be greater than zero")]
    InvalidScaleFactor(f64),

    /// A form field did not hold a finite number.
    #[error("field `{field}` is not a number: {text:?}")]
    InvalidNumber { field: String, text: String },

    #[error("{kind:?} cannot be built from {count} vertices")]
    InvalidVertexCount { kind: ShapeKind, count: usize },

    /// The window rectangle has zero (or negative) width or height.
    #[error("degenerate window rectangle")]
    DegenerateWindow,

    #[error("unknown shape {0:?}")]
    UnknownShape(ShapeId),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration value outside its allowed range.
    #[error("invalid configuration field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanvasError>;
