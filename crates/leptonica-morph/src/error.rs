//! Error types for leptonica-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] leptonica_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Source image is not 1 bpp (`pixGetDepth(pixs) != 1` in the C source).
    #[error("source image must be 1 bpp, got {actual} bpp")]
    WrongDepth {
        /// The depth the source image actually had.
        actual: u32,
    },

    /// The structuring element has a zero width or height dimension.
    #[error("structuring element has a zero dimension ({width}x{height})")]
    EmptySel {
        /// The SEL's width.
        width: u32,
        /// The SEL's height.
        height: u32,
    },

    /// Caller-provided destination has different dimensions than the source.
    #[error("destination size {actual:?} does not match source size {expected:?}")]
    SizeMismatch {
        /// `(width, height)` of the source image.
        expected: (u32, u32),
        /// `(width, height)` of the caller-provided destination.
        actual: (u32, u32),
    },

    /// A brick operator received `h < 1` or `v < 1`.
    #[error("brick dimensions must each be >= 1, got {width}x{height}")]
    BrickDegenerate {
        /// The requested brick width.
        width: u32,
        /// The requested brick height.
        height: u32,
    },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
