//! Error types for leptonica-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! # See also
//!
//! C Leptonica uses integer return codes and `L_WARNING` / `L_ERROR` macros.
//! This module replaces those with Rust's `Result<T, Error>` pattern.

use thiserror::Error;

/// Leptonica-rs error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid pixel depth
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Incompatible pixel depths
    #[error("incompatible pixel depths: {0} bpp vs {1} bpp")]
    IncompatibleDepths(u32, u32),

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Unsupported pixel depth for this operation
    #[error("unsupported pixel depth: {0} bpp")]
    UnsupportedDepth(u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Null pointer or empty input
    #[error("null or empty input: {0}")]
    NullInput(&'static str),

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for Leptonica operations
pub type Result<T> = std::result::Result<T, Error>;
