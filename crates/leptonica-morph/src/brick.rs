//! Separable rectangular ("brick") fast paths (component F).
//!
//! A `h`x`v` all-hit rectangular SEL is separable into a `h`x`1` horizontal
//! SEL and a `1`x`v` vertical SEL: dilating by the rectangle equals
//! dilating by the horizontal line, then dilating that result by the
//! vertical line (and likewise, with AND instead of OR, for erosion). Doing
//! the two passes independently costs `O(h + v)` rasterop rectangles per
//! row/column instead of `O(h * v)`, without changing the result.
//!
//! `hsize`/`vsize` name the brick's horizontal and vertical extents, e.g.
//! `dilate_brick(None, &pix, 5, 3)` is equivalent to (but faster than)
//! `dilate(None, &pix, &Sel::create_brick(5, 3)?)`.
//!
//! # See also
//!
//! C Leptonica: `pixDilateBrick()`, `pixErodeBrick()`, `pixOpenBrick()`,
//! `pixCloseBrick()`, `pixCloseSafeBrick()` in `morph.c`.

use leptonica_core::{Pix, PixelDepth};

use crate::error::{MorphError, MorphResult};
use crate::morph;
use crate::sel::Sel;

fn check_brick_size(hsize: u32, vsize: u32) -> MorphResult<()> {
    if hsize < 1 || vsize < 1 {
        return Err(MorphError::BrickDegenerate { width: hsize, height: vsize });
    }
    Ok(())
}

/// Dispatch a single-axis-or-separable brick operation, calling `single`
/// when one dimension is 1 (the identity axis) and `separable` (horizontal
/// pass, then vertical pass) otherwise.
fn dispatch_brick(
    hsize: u32,
    vsize: u32,
    s: &Pix,
    single: impl FnOnce(&Pix, &Sel) -> MorphResult<Pix>,
    separable: impl FnOnce(&Pix, &Sel, &Sel) -> MorphResult<Pix>,
) -> MorphResult<Pix> {
    if hsize == 1 && vsize == 1 {
        return Ok(s.deep_clone());
    }
    if hsize == 1 {
        let selv = Sel::create_vertical(vsize)?;
        return single(s, &selv);
    }
    if vsize == 1 {
        let selh = Sel::create_horizontal(hsize)?;
        return single(s, &selh);
    }
    let selh = Sel::create_horizontal(hsize)?;
    let selv = Sel::create_vertical(vsize)?;
    separable(s, &selh, &selv)
}

/// Dilation by an `hsize`x`vsize` all-hit brick, via separable horizontal
/// and vertical passes.
///
/// # See also
///
/// C Leptonica: `pixDilateBrick()` in `morph.c`
pub fn dilate_brick(d: Option<Pix>, s: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    check_brick_size(hsize, vsize)?;

    let result = dispatch_brick(
        hsize,
        vsize,
        s,
        |s, sel| morph::dilate(None, s, sel),
        |s, selh, selv| {
            let h = morph::dilate(None, s, selh)?;
            morph::dilate(None, &h, selv)
        },
    )?;

    finish(d, result)
}

/// Erosion by an `hsize`x`vsize` all-hit brick, via separable horizontal
/// and vertical passes.
///
/// # See also
///
/// C Leptonica: `pixErodeBrick()` in `morph.c`
pub fn erode_brick(d: Option<Pix>, s: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    check_brick_size(hsize, vsize)?;

    let result = dispatch_brick(
        hsize,
        vsize,
        s,
        |s, sel| morph::erode(None, s, sel),
        |s, selh, selv| {
            let h = morph::erode(None, s, selh)?;
            morph::erode(None, &h, selv)
        },
    )?;

    finish(d, result)
}

/// Opening by an `hsize`x`vsize` all-hit brick: erode-h, erode-v, dilate-h,
/// dilate-v, in that order (rather than two independent separable
/// erosion/dilation passes), which is the brick-specific 4-step ping-pong
/// Leptonica uses instead of composing [`dilate_brick`] with
/// [`erode_brick`] directly.
///
/// # See also
///
/// C Leptonica: `pixOpenBrick()` in `morph.c`
pub fn open_brick(d: Option<Pix>, s: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    check_brick_size(hsize, vsize)?;

    if hsize == 1 && vsize == 1 {
        return finish(d, s.deep_clone());
    }

    let result = if hsize == 1 || vsize == 1 {
        let sel = Sel::create_brick(hsize, vsize)?;
        morph::open(None, s, &sel)?
    } else {
        let selh = Sel::create_horizontal(hsize)?;
        let selv = Sel::create_vertical(vsize)?;
        let t1 = morph::erode(None, s, &selh)?;
        let t2 = morph::erode(None, &t1, &selv)?;
        let t3 = morph::dilate(None, &t2, &selh)?;
        morph::dilate(None, &t3, &selv)?
    };

    finish(d, result)
}

/// Closing by an `hsize`x`vsize` all-hit brick: dilate-h, dilate-v,
/// erode-h, erode-v, the dual of [`open_brick`]'s ping-pong.
///
/// # See also
///
/// C Leptonica: `pixCloseBrick()` in `morph.c`
pub fn close_brick(d: Option<Pix>, s: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    check_brick_size(hsize, vsize)?;

    if hsize == 1 && vsize == 1 {
        return finish(d, s.deep_clone());
    }

    let result = if hsize == 1 || vsize == 1 {
        let sel = Sel::create_brick(hsize, vsize)?;
        morph::close(None, s, &sel)?
    } else {
        let selh = Sel::create_horizontal(hsize)?;
        let selv = Sel::create_vertical(vsize)?;
        let t1 = morph::dilate(None, s, &selh)?;
        let t2 = morph::dilate(None, &t1, &selv)?;
        let t3 = morph::erode(None, &t2, &selh)?;
        morph::erode(None, &t3, &selv)?
    };

    finish(d, result)
}

/// Closing by an `hsize`x`vsize` all-hit brick, padded so the result is
/// guaranteed to contain the source even under the asymmetric boundary
/// condition.
///
/// Unlike [`crate::morph::close_safe`], which pads each side individually
/// by that side's own `max_translations` extent, this pads all four sides
/// uniformly by `32 * ceil(max(hsize, vsize) / 2 / 32)` — a deliberate
/// simplification that is exact for centered bricks (where every side's
/// true extent is already at most `max(hsize, vsize) / 2`) and merely
/// generous for off-center ones.
///
/// # See also
///
/// C Leptonica: `pixCloseSafeBrick()` in `morph.c`
pub fn close_safe_brick(d: Option<Pix>, s: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    check_brick_size(hsize, vsize)?;

    if crate::boundary::morph_boundary_condition() == crate::boundary::MorphBc::Symmetric {
        return close_brick(d, s, hsize, vsize);
    }

    let half = hsize.max(vsize) / 2;
    let bordsize = 32 * half.div_ceil(32);

    let padded = s.add_border(bordsize, 0)?;
    let closed = close_brick(None, &padded, hsize, vsize)?;
    let result = closed.remove_border(bordsize)?;

    finish(d, result)
}

/// Shared finishing step: a brick operator ignores the contents of a
/// caller-provided `d` (it always recomputes into a fresh buffer) but still
/// validates that `d`, if given, is the right size.
fn finish(d: Option<Pix>, result: Pix) -> MorphResult<Pix> {
    if let Some(d) = &d {
        if !d.sizes_equal(&result) {
            return Err(MorphError::SizeMismatch {
                expected: (result.width(), result.height()),
                actual: (d.width(), d.height()),
            });
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{reset_morph_boundary_condition, MorphBc};
    use leptonica_core::Pix;

    fn full_pix(w: u32, h: u32) -> Pix {
        let mut p = Pix::new(w, h, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        p.set_all();
        p.into()
    }

    #[test]
    fn brick_degenerate_size_is_rejected() {
        let pix = Pix::new(8, 8, PixelDepth::Bit1).unwrap();
        assert!(matches!(
            dilate_brick(None, &pix, 0, 3),
            Err(MorphError::BrickDegenerate { .. })
        ));
    }

    #[test]
    fn identity_brick_is_a_plain_copy() {
        let mut pix = Pix::new(8, 8, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(2, 2, 1).unwrap();
        let pix: Pix = pix.into();

        let out = dilate_brick(None, &pix, 1, 1).unwrap();
        assert!(out.equals(&pix));
        let out = erode_brick(None, &pix, 1, 1).unwrap();
        assert!(out.equals(&pix));
    }

    #[test]
    fn dilate_brick_matches_generic_dilate() {
        let mut pix = Pix::new(16, 16, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(5, 5, 1).unwrap();
        pix.set_pixel(9, 9, 1).unwrap();
        let pix: Pix = pix.into();

        let via_brick = dilate_brick(None, &pix, 5, 3).unwrap();
        let sel = Sel::create_brick(5, 3).unwrap();
        let via_generic = morph::dilate(None, &pix, &sel).unwrap();

        assert!(via_brick.equals(&via_generic));
    }

    #[test]
    fn erode_brick_matches_generic_erode() {
        reset_morph_boundary_condition(MorphBc::Asymmetric);
        let pix = full_pix(16, 16);

        let via_brick = erode_brick(None, &pix, 5, 3).unwrap();
        let sel = Sel::create_brick(5, 3).unwrap();
        let via_generic = morph::erode(None, &pix, &sel).unwrap();

        assert!(via_brick.equals(&via_generic));
    }

    #[test]
    fn open_brick_matches_generic_open() {
        let mut pix = Pix::new(16, 16, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        for y in 4..10 {
            for x in 4..10 {
                pix.set_pixel(x, y, 1).unwrap();
            }
        }
        let pix: Pix = pix.into();

        let via_brick = open_brick(None, &pix, 3, 3).unwrap();
        let sel = Sel::create_brick(3, 3).unwrap();
        let via_generic = morph::open(None, &pix, &sel).unwrap();

        assert!(via_brick.equals(&via_generic));
    }

    #[test]
    fn close_brick_matches_generic_close() {
        let mut pix = Pix::new(16, 16, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(4, 4, 1).unwrap();
        pix.set_pixel(6, 4, 1).unwrap();
        let pix: Pix = pix.into();

        let via_brick = close_brick(None, &pix, 3, 1).unwrap();
        let sel = Sel::create_horizontal(3).unwrap();
        let via_generic = morph::close(None, &pix, &sel).unwrap();

        assert!(via_brick.equals(&via_generic));
    }

    #[test]
    fn close_safe_brick_preserves_corner_pixel() {
        reset_morph_boundary_condition(MorphBc::Asymmetric);
        let mut pix = Pix::new(8, 8, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(0, 0, 1).unwrap();
        let pix: Pix = pix.into();

        let out = close_safe_brick(None, &pix, 3, 3).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(1));
        assert_eq!(out.width(), 8);
        assert_eq!(out.height(), 8);
    }

    #[test]
    fn close_safe_brick_matches_close_brick_under_symmetric_bc() {
        reset_morph_boundary_condition(MorphBc::Symmetric);
        let mut pix = Pix::new(8, 8, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(3, 3, 1).unwrap();
        let pix: Pix = pix.into();

        let safe = close_safe_brick(None, &pix, 3, 3).unwrap();
        let plain = close_brick(None, &pix, 3, 3).unwrap();
        assert!(safe.equals(&plain));

        reset_morph_boundary_condition(MorphBc::Asymmetric);
    }
}
