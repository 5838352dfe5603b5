//! leptonica-core - The packed-bitmap substrate
//!
//! Owns the `Pix` image container (packed 32-bit-word rows, MSB-is-leftmost
//! pixel) and the word-level raster operations it is built from. Higher-level
//! crates (morphology, transforms, ...) are expressed entirely in terms of
//! the primitives exposed here.

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{InColor, Pix, PixMut, PixelDepth, RopOp};
