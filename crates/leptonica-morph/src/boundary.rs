//! Boundary-condition control (component G).
//!
//! The engine supports two mutually exclusive conventions for how pixels
//! outside the image are treated during erosion-family operations:
//! `Asymmetric` ("outside = OFF", the default) and `Symmetric` ("outside =
//! same as adjacent border"). The convention is process-wide state, read by
//! [`crate::morph::erode`] and [`crate::morph::close_safe`].
//!
//! # See also
//!
//! C Leptonica: the `MORPH_BC` global and `resetMorphBoundaryCondition()` /
//! `getMorphBorderPixelColor()` in `morph.c`.

use std::sync::atomic::{AtomicU8, Ordering};

use leptonica_core::PixelDepth;

use crate::error::{MorphError, MorphResult};

/// Boundary condition for erosion-family operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MorphBc {
    /// Pixels outside the image are OFF, for both dilation and erosion.
    /// This is the default, and matches the behavior of a zero-padded
    /// rasterop source read.
    Asymmetric = 0,
    /// Pixels outside the image match the natural identity of the
    /// operator: OFF for dilation, ON for erosion.
    Symmetric = 1,
}

impl MorphBc {
    /// Interpret a raw integer boundary-condition code, coercing any value
    /// other than the two valid codes to [`MorphBc::Asymmetric`] with a
    /// warning.
    ///
    /// Exists only for callers crossing an untyped boundary (e.g. a
    /// deserialized config value); prefer passing a [`MorphBc`] directly,
    /// which makes the invalid-value case unrepresentable.
    pub fn from_raw(bc: i32) -> Self {
        match bc {
            0 => MorphBc::Asymmetric,
            1 => MorphBc::Symmetric,
            other => {
                eprintln!("leptonica-morph: invalid boundary condition code {other}; using asymmetric");
                MorphBc::Asymmetric
            }
        }
    }
}

/// Process-wide boundary condition, `MORPH_BC` in the C source. Stored as
/// an atomic so concurrent readers never observe a torn value; callers are
/// still expected to set it before a batch of operations rather than
/// changing it mid-batch (see `MORPH_BC` discussion in the crate's design
/// notes).
static MORPH_BC: AtomicU8 = AtomicU8::new(MorphBc::Asymmetric as u8);

/// Read the current process-wide boundary condition.
pub fn morph_boundary_condition() -> MorphBc {
    match MORPH_BC.load(Ordering::Relaxed) {
        1 => MorphBc::Symmetric,
        _ => MorphBc::Asymmetric,
    }
}

/// Set the process-wide boundary condition used by erosion, HMT edge
/// clearing, and `close_safe`.
///
/// # See also
///
/// C Leptonica: `resetMorphBoundaryCondition()` in `morph.c`
pub fn reset_morph_boundary_condition(bc: MorphBc) {
    MORPH_BC.store(bc as u8, Ordering::Relaxed);
}

/// Which morphological operator a border-pixel-color query is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOpType {
    /// Dilation: border pixels are always treated as OFF.
    Dilation,
    /// Erosion: border pixels depend on the boundary condition.
    Erosion,
}

/// The pixel value that should be imagined just outside the image when
/// performing `op` at the given bit `depth`, under the current boundary
/// condition.
///
/// Under `Asymmetric`, or for dilation regardless of boundary condition,
/// this is always 0. Under `Symmetric` erosion, it's the maximum value
/// representable at `depth` (`(1 << depth) - 1`, or `0xffffff00` for
/// 32-bpp images, matching the C source's RGB-with-ignored-alpha
/// convention).
///
/// # Errors
///
/// Returns [`MorphError::Core`] (wrapping [`leptonica_core::Error::InvalidDepth`])
/// if `depth` is not one of 1, 2, 4, 8, 16, 32.
///
/// # See also
///
/// C Leptonica: `getMorphBorderPixelColor()` in `morph.c`
pub fn get_morph_border_pixel_color(op: MorphOpType, depth: u32) -> MorphResult<u32> {
    let depth = PixelDepth::from_bits(depth)?;

    if morph_boundary_condition() == MorphBc::Asymmetric || op == MorphOpType::Dilation {
        return Ok(0);
    }

    // Symmetric & erosion: border matches "on", i.e. the operator's
    // natural identity value at this depth.
    if depth.bits() < 32 {
        Ok((1u32 << depth.bits()) - 1)
    } else {
        Ok(0xffffff00)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_bc<T>(bc: MorphBc, f: impl FnOnce() -> T) -> T {
        let prev = morph_boundary_condition();
        reset_morph_boundary_condition(bc);
        let result = f();
        reset_morph_boundary_condition(prev);
        result
    }

    #[test]
    fn test_default_bc_is_asymmetric() {
        assert_eq!(morph_boundary_condition(), MorphBc::Asymmetric);
    }

    #[test]
    fn test_dilation_color_always_zero() {
        with_bc(MorphBc::Symmetric, || {
            assert_eq!(get_morph_border_pixel_color(MorphOpType::Dilation, 8).unwrap(), 0);
        });
        with_bc(MorphBc::Asymmetric, || {
            assert_eq!(get_morph_border_pixel_color(MorphOpType::Dilation, 8).unwrap(), 0);
        });
    }

    #[test]
    fn test_asymmetric_erosion_color_is_zero() {
        with_bc(MorphBc::Asymmetric, || {
            assert_eq!(get_morph_border_pixel_color(MorphOpType::Erosion, 1).unwrap(), 0);
        });
    }

    #[test]
    fn test_symmetric_erosion_color_1bpp_is_one() {
        // 1-bpp symmetric-erosion path is "all ones of that depth", i.e.
        // exactly 1, not a fallthrough that only covers depth == 32.
        with_bc(MorphBc::Symmetric, || {
            assert_eq!(get_morph_border_pixel_color(MorphOpType::Erosion, 1).unwrap(), 1);
        });
    }

    #[test]
    fn test_symmetric_erosion_color_8bpp() {
        with_bc(MorphBc::Symmetric, || {
            assert_eq!(get_morph_border_pixel_color(MorphOpType::Erosion, 8).unwrap(), 0xFF);
        });
    }

    #[test]
    fn test_symmetric_erosion_color_32bpp() {
        with_bc(MorphBc::Symmetric, || {
            assert_eq!(
                get_morph_border_pixel_color(MorphOpType::Erosion, 32).unwrap(),
                0xffffff00
            );
        });
    }

    #[test]
    fn test_invalid_depth_errors() {
        assert!(get_morph_border_pixel_color(MorphOpType::Erosion, 3).is_err());
    }

    #[test]
    fn test_from_raw_coerces_invalid() {
        assert_eq!(MorphBc::from_raw(0), MorphBc::Asymmetric);
        assert_eq!(MorphBc::from_raw(1), MorphBc::Symmetric);
        assert_eq!(MorphBc::from_raw(99), MorphBc::Asymmetric);
    }
}
