//! Leptonica - Image processing library for Rust
//!
//! This is a Rust port of the [Leptonica](http://www.leptonica.org/) image
//! processing library, covering the packed-bitmap rasterop substrate and
//! the binary morphological operators built on top of it.
//!
//! # Overview
//!
//! - Packed 1-bpp bitmap storage with word-level raster operations
//! - Structuring elements (SELs): bricks, lines, crosses, diamonds, and
//!   arbitrary hit/miss patterns
//! - Binary morphology: dilation, erosion, hit-miss transform, opening,
//!   closing (plain and "safe"), and their generalized variants
//! - Separable brick fast paths and boundary-condition control
//!
//! # Example
//!
//! ```
//! use leptonica::{Pix, PixelDepth};
//! use leptonica::morph::{Sel, dilate};
//!
//! let pix = Pix::new(64, 64, PixelDepth::Bit1).unwrap();
//! let sel = Sel::create_brick(3, 3).unwrap();
//! let dilated = dilate(None, &pix, &sel).unwrap();
//! assert_eq!(dilated.width(), 64);
//! ```

pub use leptonica_core::*;

/// Morphological operations, re-exported under a namespaced path so callers
/// can write `leptonica::morph::dilate(...)` alongside the core `Pix` type.
pub mod morph {
    pub use leptonica_morph::*;
}
