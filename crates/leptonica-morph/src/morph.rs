//! Generic binary morphological operators, implemented with rasterop
//! (component D), and their composites (component E).
//!
//! Every operator here takes an optional destination `d`, a source `s`, and
//! a [`Sel`], and returns the computed result. `d` exists purely to let a
//! caller signal "write into this handle" (including `d` being the same
//! handle as `s`, i.e. in-place); because [`Pix`] is an immutable,
//! reference-counted value (see [`leptonica_core::Pix`]), every operator
//! here allocates a fresh output buffer regardless of what's passed as `d`,
//! so aliasing `d` with `s` is trivially safe — there is no shared mutable
//! state for a mid-operation failure to corrupt. This is a stronger
//! guarantee than the C source's "snapshot `s` before writing `d`"
//! discipline, achieved for free by the ownership model instead of by a
//! defensive copy.
//!
//! # See also
//!
//! C Leptonica: `pixDilate()`, `pixErode()`, `pixHMT()`, `pixOpen()`,
//! `pixClose()`, `pixCloseSafe()`, `pixOpenGeneralized()`,
//! `pixCloseGeneralized()` in `morph.c`.

use leptonica_core::{Pix, PixMut, PixelDepth, RopOp};

use crate::boundary::{morph_boundary_condition, MorphBc};
use crate::error::{MorphError, MorphResult};
use crate::sel::{Sel, SelElement};

/// Shared precondition checks for all generic morphological operators:
/// source must be 1 bpp, the SEL must have nonzero extent, and a
/// caller-provided destination must match the source's dimensions.
fn validate(s: &Pix, sel: &Sel, d: Option<&Pix>) -> MorphResult<()> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    if sel.width() == 0 || sel.height() == 0 {
        return Err(MorphError::EmptySel { width: sel.width(), height: sel.height() });
    }
    if let Some(d) = d {
        if !d.sizes_equal(s) {
            return Err(MorphError::SizeMismatch {
                expected: (s.width(), s.height()),
                actual: (d.width(), d.height()),
            });
        }
    }
    Ok(())
}

/// Clear the four edge strips that the asymmetric boundary condition (or,
/// for HMT, the erosion-derived semantics unconditionally) leaves
/// undefined: the strips of width/height `(xp, yp, xn, yn)` from
/// [`Sel::max_translations`] at the left, top, right, and bottom edges.
fn clear_edge_strips(out: &mut PixMut, sel: &Sel) {
    let w = out.width() as i32;
    let h = out.height() as i32;
    let (xp, yp, xn, yn) = sel.max_translations();

    // `RopOp::Clear` ignores its source entirely; `out`'s own (not-yet-
    // mutated-at-this-rect) data is passed merely to satisfy the signature.
    if xp > 0 {
        out.clear_region(0, 0, xp, h as u32);
    }
    if xn > 0 {
        out.clear_region((w as u32).saturating_sub(xn), 0, xn, h as u32);
    }
    if yp > 0 {
        out.clear_region(0, 0, w as u32, yp);
    }
    if yn > 0 {
        out.clear_region(0, (h as u32).saturating_sub(yn), w as u32, yn);
    }
}

/// Dilation: the union, over every `Hit` cell of `sel`, of `s` translated
/// by `(j - cx, i - cy)`.
///
/// No edge clearing under either boundary condition: the asymmetric
/// "outside = OFF" rule is already self-consistent for an OR-combine over
/// zero-padded reads.
///
/// # See also
///
/// C Leptonica: `pixDilate()` in `morph.c`
pub fn dilate(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;

    let w = s.width() as i32;
    let h = s.height() as i32;
    let mut out = s.create_template().try_into_mut().unwrap();

    for y in 0..sel.height() {
        for x in 0..sel.width() {
            if sel.get_element(x, y) == Some(SelElement::Hit) {
                let dx = x as i32 - sel.origin_x() as i32;
                let dy = y as i32 - sel.origin_y() as i32;
                out.rasterop(dx, dy, w, h, RopOp::Or, s, 0, 0);
            }
        }
    }

    Ok(out.into())
}

/// Erosion: the intersection, over every `Hit` cell of `sel`, of `s`
/// translated by `(cx - j, cy - i)` — the opposite sign from dilation,
/// which is the defining duality between the two operators.
///
/// Under [`MorphBc::Asymmetric`] (the default), the four edge strips sized
/// by [`Sel::max_translations`] are cleared afterward, since those strips'
/// correct values would depend on out-of-image data under "outside = OFF".
///
/// # See also
///
/// C Leptonica: `pixErode()` in `morph.c`
pub fn erode(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;

    let w = s.width() as i32;
    let h = s.height() as i32;
    let mut out = s.create_template().try_into_mut().unwrap();
    out.set_all();

    for y in 0..sel.height() {
        for x in 0..sel.width() {
            if sel.get_element(x, y) == Some(SelElement::Hit) {
                let dx = sel.origin_x() as i32 - x as i32;
                let dy = sel.origin_y() as i32 - y as i32;
                out.rasterop(dx, dy, w, h, RopOp::And, s, 0, 0);
            }
        }
    }

    if morph_boundary_condition() == MorphBc::Asymmetric {
        clear_edge_strips(&mut out, sel);
    }

    Ok(out.into())
}

/// Hit-miss transform: the intersection of (erosion by the hits) with
/// (erosion of the complement by the misses), computed as a single
/// left-to-right, top-to-bottom accumulation over `sel`'s cells rather than
/// as two separate erosions.
///
/// The edge strips from [`Sel::max_translations`] are always cleared,
/// regardless of boundary condition: HMT is fundamentally erosion-shaped
/// and shares its edge semantics unconditionally.
///
/// If `sel` has no `Hit` or `Miss` cells, the result is the all-zero buffer
/// `create_template` starts from — a well-defined, if unremarkable, output.
///
/// # See also
///
/// C Leptonica: `pixHMT()` in `morph.c`
pub fn hmt(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;

    let w = s.width() as i32;
    let h = s.height() as i32;
    let mut out = s.create_template().try_into_mut().unwrap();
    let mut first = true;

    for y in 0..sel.height() {
        for x in 0..sel.width() {
            let dx = sel.origin_x() as i32 - x as i32;
            let dy = sel.origin_y() as i32 - y as i32;
            match sel.get_element(x, y) {
                Some(SelElement::Hit) => {
                    if first {
                        out.clear();
                        out.rasterop(dx, dy, w, h, RopOp::Src, s, 0, 0);
                        first = false;
                    } else {
                        out.rasterop(dx, dy, w, h, RopOp::And, s, 0, 0);
                    }
                }
                Some(SelElement::Miss) => {
                    if first {
                        out.set_all();
                        first = false;
                    }
                    // d = (~s) & d; on the first miss this turns the
                    // just-set all-ones buffer into exactly ~s translated.
                    out.rasterop(dx, dy, w, h, RopOp::AndNotSrc, s, 0, 0);
                }
                Some(SelElement::DontCare) | None => {}
            }
        }
    }

    clear_edge_strips(&mut out, sel);

    Ok(out.into())
}

/// Opening: erosion followed by dilation with the same SEL.
///
/// # See also
///
/// C Leptonica: `pixOpen()` in `morph.c`
pub fn open(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;
    let eroded = erode(None, s, sel)?;
    dilate(d, &eroded, sel)
}

/// Closing: dilation followed by erosion with the same SEL.
///
/// Under the asymmetric boundary condition this can clip foreground pixels
/// near the image border, violating the extensive property `s ⊆ close(s)`;
/// use [`close_safe`] when that property matters.
///
/// # See also
///
/// C Leptonica: `pixClose()` in `morph.c`
pub fn close(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;
    let dilated = dilate(None, s, sel)?;
    erode(d, &dilated, sel)
}

/// Generalized opening: a hit-miss transform followed by dilation using
/// only the SEL's hits. Idempotent for SELs with both hits and misses.
///
/// # See also
///
/// C Leptonica: `pixOpenGeneralized()` in `morph.c`
pub fn open_generalized(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;
    let t = hmt(None, s, sel)?;
    dilate(d, &t, sel)
}

/// Generalized closing: a dilation using only the SEL's hits, followed by
/// a hit-miss transform. The dual of [`open_generalized`].
///
/// # See also
///
/// C Leptonica: `pixCloseGeneralized()` in `morph.c`
pub fn close_generalized(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    validate(s, sel, d.as_ref())?;
    let t = dilate(None, s, sel)?;
    hmt(d, &t, sel)
}

/// Closing with a border pad that guarantees the extensive property
/// `s ⊆ close_safe(s)` even under the asymmetric boundary condition.
///
/// Under [`MorphBc::Symmetric`], identical to [`close`] (no padding is
/// needed: the symmetric convention already keeps closing extensive). Under
/// [`MorphBc::Asymmetric`], pads `s` by `xbord` columns on both left and
/// right (rounded up to a whole 32-bit word, so the padded rasterops stay
/// word-aligned) and by `yp`/`yn` rows top/bottom, closes the padded image,
/// then strips the border back off.
///
/// A size mismatch between a caller-provided `d` and `s` is a warning, not
/// an error, here — the operation proceeds regardless. This is the one
/// intentional departure from this crate's usual strict validation,
/// matching the C source.
///
/// # See also
///
/// C Leptonica: `pixCloseSafe()` in `morph.c`
pub fn close_safe(d: Option<Pix>, s: &Pix, sel: &Sel) -> MorphResult<Pix> {
    if s.depth() != PixelDepth::Bit1 {
        return Err(MorphError::WrongDepth { actual: s.depth().bits() });
    }
    if sel.width() == 0 || sel.height() == 0 {
        return Err(MorphError::EmptySel { width: sel.width(), height: sel.height() });
    }
    if let Some(d) = &d {
        if !d.sizes_equal(s) {
            eprintln!("leptonica-morph: close_safe: dest/src sizes unequal, proceeding anyway");
        }
    }

    if morph_boundary_condition() == MorphBc::Symmetric {
        return close(d, s, sel);
    }

    let (xp, yp, xn, yn) = sel.max_translations();
    let xmax = xp.max(xn);
    let xbord = 32 * xmax.div_ceil(32);

    let p1 = s.add_border_general(xbord, xbord, yp, yn, 0)?;
    let closed = close(None, &p1, sel)?;
    let p2 = closed.remove_border_general(xbord, xbord, yp, yn)?;

    Ok(p2)
}
