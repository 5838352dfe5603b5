//! Image raster operations (logical operations)
//!
//! This module provides functions for pixel-wise logical operations:
//!
//! - AND, OR, XOR, NOT operations
//! - NAND, NOR, XNOR operations
//! - In-place operations
//! - Region-based operations
//! - [`PixMut::rasterop`], the general word-level rectangle combinator that
//!   the morphology crate builds dilation, erosion and friends on top of
//!
//! These correspond to Leptonica's rop.c functions including
//! pixAnd, pixOr, pixXor, pixInvert and pixRasterop.

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

/// Color to fill when shifting or translating image regions.
///
/// # See also
///
/// C Leptonica: `L_BRING_IN_WHITE`, `L_BRING_IN_BLACK` in `pix.h`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InColor {
    /// Fill exposed areas with the maximum pixel value
    White,
    /// Fill exposed areas with zero
    Black,
}

/// Raster operation type.
///
/// Each variant names the combination of `d` (destination) and `s` (source)
/// bits it produces; for 1-bpp images this is applied a whole word at a
/// time, for everything else one pixel value at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopOp {
    /// Clear: d = 0
    Clear,
    /// Set: d = 1 (all bits set)
    Set,
    /// Copy source: d = s
    Src,
    /// Invert destination: d = ~d
    NotDst,
    /// Invert source: d = ~s
    NotSrc,
    /// AND: d = s & d
    And,
    /// OR: d = s | d
    Or,
    /// XOR: d = s ^ d
    Xor,
    /// NAND: d = ~(s & d)
    Nand,
    /// NOR: d = ~(s | d)
    Nor,
    /// XNOR: d = ~(s ^ d)
    Xnor,
    /// AND with inverted source: d = ~s & d
    AndNotSrc,
    /// AND with inverted dest: d = s & ~d
    AndNotDst,
    /// OR with inverted source: d = ~s | d
    OrNotSrc,
    /// OR with inverted dest: d = s | ~d
    OrNotDst,
}

impl RopOp {
    /// Check if this operation requires a source image
    #[inline]
    pub fn requires_source(self) -> bool {
        !matches!(self, RopOp::Clear | RopOp::Set | RopOp::NotDst)
    }
}

impl Pix {
    /// Perform AND operation with another image.
    ///
    /// Returns a new image where each pixel is the bitwise AND of
    /// the corresponding pixels in self and other.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    ///
    /// # Example
    ///
    /// ```
    /// use leptonica_core::{Pix, PixelDepth};
    ///
    /// let pix1 = Pix::new(64, 64, PixelDepth::Bit1).unwrap();
    /// let pix2 = Pix::new(64, 64, PixelDepth::Bit1).unwrap();
    /// let result = pix1.and(&pix2).unwrap();
    /// ```
    pub fn and(&self, other: &Pix) -> Result<Pix> {
        self.rop(other, RopOp::And)
    }

    /// Perform OR operation with another image.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn or(&self, other: &Pix) -> Result<Pix> {
        self.rop(other, RopOp::Or)
    }

    /// Perform XOR operation with another image.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn xor(&self, other: &Pix) -> Result<Pix> {
        self.rop(other, RopOp::Xor)
    }

    /// Subtract `other` from `self`: d = d & ~s.
    ///
    /// For binary images this is the usual set-difference: pixels on in
    /// `other` are cleared in the result regardless of their value in
    /// `self`.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn subtract(&self, other: &Pix) -> Result<Pix> {
        self.rop(other, RopOp::AndNotSrc)
    }

    /// Invert all pixels in the image.
    ///
    /// For binary images, foreground becomes background and vice versa.
    /// For other depths, each pixel value v becomes (max_value - v).
    ///
    /// # Example
    ///
    /// ```
    /// use leptonica_core::{Pix, PixelDepth};
    ///
    /// let pix = Pix::new(64, 64, PixelDepth::Bit1).unwrap();
    /// let inverted = pix.invert();
    /// ```
    pub fn invert(&self) -> Pix {
        let result = self.deep_clone();
        let mut result_mut = result.try_into_mut().unwrap();
        result_mut.invert_inplace();
        result_mut.into()
    }

    /// Apply a general raster operation with another image, over the full
    /// extent of both images (which must match).
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn rop(&self, other: &Pix, op: RopOp) -> Result<Pix> {
        if !op.requires_source() {
            let result = self.deep_clone();
            let mut result_mut = result.try_into_mut().unwrap();
            result_mut.rop_unary_inplace(op);
            return Ok(result_mut.into());
        }

        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }

        if self.depth() != other.depth() {
            return Err(Error::IncompatibleDepths(
                self.depth().bits(),
                other.depth().bits(),
            ));
        }

        match self.depth() {
            PixelDepth::Bit1 => self.rop_binary(other, op),
            _ => self.rop_generic(other, op),
        }
    }

    /// Binary image raster operation (1-bit, word-optimized)
    fn rop_binary(&self, other: &Pix, op: RopOp) -> Result<Pix> {
        let height = self.height();
        let wpl = self.wpl();

        let result = Pix::new(self.width(), height, PixelDepth::Bit1)?;
        let mut result_mut = result.try_into_mut().unwrap();

        for y in 0..height {
            let line_d = self.row_data(y);
            let line_s = other.row_data(y);
            let line_out = result_mut.row_data_mut(y);

            for w in 0..wpl as usize {
                line_out[w] = apply_rop_word(line_d[w], line_s[w], op);
            }
        }

        Ok(result_mut.into())
    }

    /// Raster operation for non-binary depths, one pixel value at a time.
    fn rop_generic(&self, other: &Pix, op: RopOp) -> Result<Pix> {
        let width = self.width();
        let height = self.height();
        let max_val = self.depth().max_value();

        let result = Pix::new(width, height, self.depth())?;
        let mut result_mut = result.try_into_mut().unwrap();

        for y in 0..height {
            for x in 0..width {
                let d = self.get_pixel(x, y).unwrap_or(0);
                let s = other.get_pixel(x, y).unwrap_or(0);
                let val = apply_rop_value(d, s, op, max_val);
                result_mut.set_pixel_unchecked(x, y, val);
            }
        }

        Ok(result_mut.into())
    }

    /// Translate (shift) an image by the given horizontal and vertical amounts.
    ///
    /// Creates a new image of the same size, shifted by (hshift, vshift).
    /// Exposed areas are filled with `incolor`.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixTranslate()` in `rop.c`
    pub fn translate(&self, hshift: i32, vshift: i32, incolor: InColor) -> Pix {
        let w = self.width();
        let h = self.height();
        let mut result_mut = Pix::new(w, h, self.depth())
            .expect("dimensions of an existing Pix are always valid")
            .try_into_mut()
            .unwrap();

        match incolor {
            InColor::White => result_mut.set_all(),
            InColor::Black => result_mut.clear(),
        }
        result_mut.rasterop(hshift, vshift, w as i32, h as i32, RopOp::Src, self, 0, 0);
        result_mut.into()
    }
}

impl PixMut {
    /// In-place AND operation with another image.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn and_inplace(&mut self, other: &Pix) -> Result<()> {
        self.rop_inplace(other, RopOp::And)
    }

    /// In-place OR operation with another image.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn or_inplace(&mut self, other: &Pix) -> Result<()> {
        self.rop_inplace(other, RopOp::Or)
    }

    /// In-place XOR operation with another image.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn xor_inplace(&mut self, other: &Pix) -> Result<()> {
        self.rop_inplace(other, RopOp::Xor)
    }

    /// Invert all pixels in place.
    pub fn invert_inplace(&mut self) {
        self.rop_unary_inplace(RopOp::NotDst);
    }

    /// Apply a unary raster operation in place (Clear, Set, NotDst)
    fn rop_unary_inplace(&mut self, op: RopOp) {
        match op {
            RopOp::Clear => self.clear(),
            RopOp::Set => self.set_all(),
            RopOp::NotDst => {
                for word in self.data_mut().iter_mut() {
                    *word = !*word;
                }
            }
            _ => {}
        }
    }

    /// Apply a general raster operation in place, over the full extent of
    /// both images (which must match).
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn rop_inplace(&mut self, other: &Pix, op: RopOp) -> Result<()> {
        if !op.requires_source() {
            self.rop_unary_inplace(op);
            return Ok(());
        }

        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }

        if self.depth() != other.depth() {
            return Err(Error::IncompatibleDepths(
                self.depth().bits(),
                other.depth().bits(),
            ));
        }

        match self.depth() {
            PixelDepth::Bit1 => self.rop_binary_inplace(other, op),
            _ => self.rop_generic_inplace(other, op),
        }

        Ok(())
    }

    /// Binary image raster operation in place (1-bit, word-optimized)
    fn rop_binary_inplace(&mut self, other: &Pix, op: RopOp) {
        let height = self.height();
        let wpl = self.wpl();

        for y in 0..height {
            let line_s = other.row_data(y);
            let line_d = self.row_data_mut(y);

            for w in 0..wpl as usize {
                line_d[w] = apply_rop_word(line_d[w], line_s[w], op);
            }
        }
    }

    /// Raster operation in place for non-binary depths.
    fn rop_generic_inplace(&mut self, other: &Pix, op: RopOp) {
        let width = self.width();
        let height = self.height();
        let max_val = self.depth().max_value();

        for y in 0..height {
            for x in 0..width {
                let d = self.get_pixel(x, y).unwrap_or(0);
                let s = other.get_pixel(x, y).unwrap_or(0);
                let val = apply_rop_value(d, s, op, max_val);
                self.set_pixel_unchecked(x, y, val);
            }
        }
    }

    /// Clear a rectangular region to zero.
    pub fn clear_region(&mut self, x: u32, y: u32, w: u32, h: u32) {
        self.fill_region(x, y, w, h, 0);
    }

    /// Set a rectangular region to the maximum pixel value.
    pub fn set_region(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let max_val = self.depth().max_value();
        self.fill_region(x, y, w, h, max_val);
    }

    /// Fill a rectangular region with a constant value. Clips to image
    /// bounds; does nothing if the region is entirely outside the image.
    fn fill_region(&mut self, x: u32, y: u32, w: u32, h: u32, value: u32) {
        let img_w = self.width();
        let img_h = self.height();

        if x >= img_w || y >= img_h {
            return;
        }

        let x_end = (x + w).min(img_w);
        let y_end = (y + h).min(img_h);

        for py in y..y_end {
            for px in x..x_end {
                self.set_pixel_unchecked(px, py, value);
            }
        }
    }

    /// In-place vertical band shift.
    ///
    /// Shifts the vertical band `[bx, bx+bw)` (full image height) up or
    /// down by `vshift`, filling exposed rows with `incolor`.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixRasteropVIP()` in `rop.c`
    pub fn rasterop_vip(&mut self, bx: i32, bw: i32, vshift: i32, incolor: InColor) {
        let img_w = self.width() as i32;
        let img_h = self.height() as i32;
        let bx = bx.max(0);
        let bw = bw.min(img_w - bx).max(0);
        if bw == 0 || img_h == 0 {
            return;
        }

        let snapshot = self.snapshot();
        let fill = match incolor {
            InColor::White => self.depth().max_value(),
            InColor::Black => 0,
        };
        self.fill_region(bx as u32, 0, bw as u32, img_h as u32, fill);
        self.rasterop(bx, vshift, bw, img_h, RopOp::Src, &snapshot, bx, 0);
    }

    /// In-place horizontal band shift.
    ///
    /// Shifts the horizontal band `[by, by+bh)` (full image width) left or
    /// right by `hshift`, filling exposed columns with `incolor`.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixRasteropHIP()` in `rop.c`
    pub fn rasterop_hip(&mut self, by: i32, bh: i32, hshift: i32, incolor: InColor) {
        let img_w = self.width() as i32;
        let img_h = self.height() as i32;
        let by = by.max(0);
        let bh = bh.min(img_h - by).max(0);
        if bh == 0 || img_w == 0 {
            return;
        }

        let snapshot = self.snapshot();
        let fill = match incolor {
            InColor::White => self.depth().max_value(),
            InColor::Black => 0,
        };
        self.fill_region(0, by as u32, img_w as u32, bh as u32, fill);
        self.rasterop(hshift, by, img_w, bh, RopOp::Src, &snapshot, 0, by);
    }

    /// Copy the current contents out to an independent `Pix`, for use as
    /// the `src` of a rasterop that reads the pre-mutation state of `self`.
    fn snapshot(&self) -> Pix {
        let mut copy = Pix::new(self.width(), self.height(), self.depth())
            .expect("dimensions of an existing PixMut are always valid")
            .try_into_mut()
            .unwrap();
        copy.data_mut().copy_from_slice(self.data());
        copy.into()
    }

    /// Combine a `w`x`h` rectangle of `src`, translated so that its origin
    /// lands at `(dx, dy)` in `self`, into `self` at `(dx, dy)` under `op`.
    ///
    /// `src` pixels are read starting at `(sx, sy)`; the region actually
    /// touched is clipped to both images' bounds. Source reads outside
    /// `src`'s extent are treated as 0 (`MORPH_BC`-independent: callers that
    /// need the symmetric boundary condition pad `src` first). `dx - sx`
    /// and `dy - sy` need not be word- or byte-aligned; cross-word shifts
    /// are handled a word at a time.
    ///
    /// Only meaningful for 1-bpp images; other depths are combined one
    /// pixel at a time via the non-rasterop paths above.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixRasterop()` in `rop.c`
    pub fn rasterop(&mut self, dx: i32, dy: i32, w: i32, h: i32, op: RopOp, src: &Pix, sx: i32, sy: i32) {
        let dst_w = self.width() as i32;
        let dst_h = self.height() as i32;
        let src_w = src.width() as i32;
        let src_h = src.height() as i32;

        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + w).min(dst_w);
        let y1 = (dy + h).min(dst_h);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let shift = dx - sx;
        let wpl_s = src.wpl() as i32;

        let word_start = x0 >> 5;
        let word_end = (x1 - 1) >> 5;

        for dst_y in y0..y1 {
            let src_y = dst_y - dy + sy;
            let src_row: Option<&[u32]> = if src_y >= 0 && src_y < src_h {
                Some(src.row_data(src_y as u32))
            } else {
                None
            };

            let dst_row = self.row_data_mut(dst_y as u32);

            for wi in word_start..=word_end {
                let word_bit_start = wi * 32;
                let range_mask = bit_range_mask(word_bit_start, x0, x1);
                if range_mask == 0 {
                    continue;
                }

                let d_word = dst_row[wi as usize];
                let s_word = if op.requires_source() {
                    shifted_src_word(src_row, wpl_s, src_w, word_bit_start, shift)
                } else {
                    0
                };

                let new_val = apply_rop_word(d_word, s_word, op);
                dst_row[wi as usize] = (d_word & !range_mask) | (new_val & range_mask);
            }
        }
    }
}

/// Fetch word `idx` of a packed-bitmap row, treating any index outside
/// `[0, wpl)` (or a missing row) as all-zero.
#[inline]
fn word_at(row: Option<&[u32]>, wpl: i32, idx: i32) -> u32 {
    if idx < 0 || idx >= wpl {
        return 0;
    }
    match row {
        Some(r) => r[idx as usize],
        None => 0,
    }
}

/// Mask of bits in a word starting at absolute bit coordinate
/// `word_bit_start` whose x-coordinate falls in `[lo_x, hi_x)`.
///
/// Bit `i` (from the MSB, `i = 0..31`) of a word starting at
/// `word_bit_start` corresponds to x-coordinate `word_bit_start + i`.
#[inline]
fn bit_range_mask(word_bit_start: i32, lo_x: i32, hi_x: i32) -> u32 {
    let lo = (lo_x - word_bit_start).clamp(0, 32);
    let hi = (hi_x - word_bit_start).clamp(0, 32);
    if hi <= lo {
        return 0;
    }
    let width = hi - lo;
    let full: u32 = if width >= 32 { 0xFFFFFFFF } else { (1u32 << width) - 1 };
    full << (32 - hi)
}

/// Build the source word that aligns with destination word
/// `word_bit_start..word_bit_start+32`, given `shift = dx - sx`.
///
/// Reads straddle at most two source words and are stitched together with
/// a bit shift; bits whose source x-coordinate falls outside
/// `[0, src_w)` are cleared.
#[inline]
fn shifted_src_word(
    src_row: Option<&[u32]>,
    wpl_s: i32,
    src_w: i32,
    word_bit_start: i32,
    shift: i32,
) -> u32 {
    let start = word_bit_start - shift;
    let word_idx0 = start.div_euclid(32);
    let bit_offset = start.rem_euclid(32);

    let w0 = word_at(src_row, wpl_s, word_idx0);
    let combined = if bit_offset == 0 {
        w0
    } else {
        let w1 = word_at(src_row, wpl_s, word_idx0 + 1);
        (w0 << bit_offset) | (w1 >> (32 - bit_offset))
    };

    combined & bit_range_mask(start, 0, src_w)
}

/// Apply a raster operation to a 32-bit word (for binary images)
#[inline]
fn apply_rop_word(d: u32, s: u32, op: RopOp) -> u32 {
    match op {
        RopOp::Clear => 0,
        RopOp::Set => 0xFFFFFFFF,
        RopOp::Src => s,
        RopOp::NotDst => !d,
        RopOp::NotSrc => !s,
        RopOp::And => s & d,
        RopOp::Or => s | d,
        RopOp::Xor => s ^ d,
        RopOp::Nand => !(s & d),
        RopOp::Nor => !(s | d),
        RopOp::Xnor => !(s ^ d),
        RopOp::AndNotSrc => !s & d,
        RopOp::AndNotDst => s & !d,
        RopOp::OrNotSrc => !s | d,
        RopOp::OrNotDst => s | !d,
    }
}

/// Apply a raster operation to pixel values (for non-binary depths)
#[inline]
fn apply_rop_value(d: u32, s: u32, op: RopOp, max_val: u32) -> u32 {
    match op {
        RopOp::Clear => 0,
        RopOp::Set => max_val,
        RopOp::Src => s,
        RopOp::NotDst => max_val - d,
        RopOp::NotSrc => max_val - s,
        RopOp::And => s & d,
        RopOp::Or => s | d,
        RopOp::Xor => s ^ d,
        RopOp::Nand => max_val - (s & d),
        RopOp::Nor => max_val - (s | d),
        RopOp::Xnor => max_val - (s ^ d),
        RopOp::AndNotSrc => (max_val - s) & d,
        RopOp::AndNotDst => s & (max_val - d),
        RopOp::OrNotSrc => (max_val - s) | d,
        RopOp::OrNotDst => s | (max_val - d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_or_xor() {
        let pix1 = Pix::new(64, 8, PixelDepth::Bit1).unwrap();
        let mut m1 = pix1.try_into_mut().unwrap();
        m1.set_pixel(0, 0, 1).unwrap();
        m1.set_pixel(1, 0, 1).unwrap();
        let pix1: Pix = m1.into();

        let pix2 = Pix::new(64, 8, PixelDepth::Bit1).unwrap();
        let mut m2 = pix2.try_into_mut().unwrap();
        m2.set_pixel(1, 0, 1).unwrap();
        m2.set_pixel(2, 0, 1).unwrap();
        let pix2: Pix = m2.into();

        let and = pix1.and(&pix2).unwrap();
        assert_eq!(and.get_pixel(0, 0), Some(0));
        assert_eq!(and.get_pixel(1, 0), Some(1));
        assert_eq!(and.get_pixel(2, 0), Some(0));

        let or = pix1.or(&pix2).unwrap();
        assert_eq!(or.get_pixel(0, 0), Some(1));
        assert_eq!(or.get_pixel(1, 0), Some(1));
        assert_eq!(or.get_pixel(2, 0), Some(1));

        let xor = pix1.xor(&pix2).unwrap();
        assert_eq!(xor.get_pixel(0, 0), Some(1));
        assert_eq!(xor.get_pixel(1, 0), Some(0));
        assert_eq!(xor.get_pixel(2, 0), Some(1));
    }

    #[test]
    fn test_invert() {
        let pix = Pix::new(32, 4, PixelDepth::Bit1).unwrap();
        let mut m = pix.try_into_mut().unwrap();
        m.set_pixel(0, 0, 1).unwrap();
        let pix: Pix = m.into();

        let inv = pix.invert();
        assert_eq!(inv.get_pixel(0, 0), Some(0));
        assert_eq!(inv.get_pixel(1, 0), Some(1));
    }

    #[test]
    fn test_dimension_mismatch() {
        let pix1 = Pix::new(32, 32, PixelDepth::Bit1).unwrap();
        let pix2 = Pix::new(16, 16, PixelDepth::Bit1).unwrap();
        assert!(pix1.and(&pix2).is_err());
    }

    #[test]
    fn test_rasterop_aligned_copy() {
        let mut src = Pix::new(32, 4, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        src.set_pixel(5, 1, 1).unwrap();
        src.set_pixel(31, 1, 1).unwrap();
        let src: Pix = src.into();

        let mut dst = Pix::new(32, 4, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        dst.rasterop(0, 0, 32, 4, RopOp::Src, &src, 0, 0);

        assert_eq!(dst.get_pixel(5, 1), Some(1));
        assert_eq!(dst.get_pixel(31, 1), Some(1));
        assert_eq!(dst.get_pixel(6, 1), Some(0));
    }

    #[test]
    fn test_rasterop_unaligned_shift() {
        // A single bit shifted across a word boundary must land exactly
        // `shift` pixels to the right, with the rest of the row untouched.
        let mut src = Pix::new(64, 1, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        src.set_pixel(10, 0, 1).unwrap();
        let src: Pix = src.into();

        let mut dst = Pix::new(64, 1, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        dst.rasterop(0, 0, 64, 1, RopOp::Src, &src, -7, 0);

        assert_eq!(dst.get_pixel(17, 0), Some(1));
        for x in 0..64 {
            if x != 17 {
                assert_eq!(dst.get_pixel(x, 0), Some(0), "unexpected bit at x={x}");
            }
        }
    }

    #[test]
    fn test_rasterop_out_of_bounds_source_reads_as_zero() {
        let src = Pix::new(16, 16, PixelDepth::Bit1).unwrap();
        let mut dst = Pix::new(16, 16, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        dst.set_all();

        // Shift the source so that it only partially overlaps dst; the part
        // that would read beyond src's right edge must come in as 0.
        dst.rasterop(0, 0, 16, 16, RopOp::Src, &src, -8, 0);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(dst.get_pixel(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_rasterop_partial_word_preserves_untouched_bits() {
        let src = Pix::new(32, 1, PixelDepth::Bit1).unwrap();
        let mut dst = Pix::new(32, 1, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        dst.set_all();

        // Only clear pixels [8, 16); the rest of the word must stay set.
        dst.rasterop(8, 0, 8, 1, RopOp::Src, &src, 0, 0);
        for x in 0..32 {
            let expected = if (8..16).contains(&x) { 0 } else { 1 };
            assert_eq!(dst.get_pixel(x, 0), Some(expected), "x={x}");
        }
    }

    #[test]
    fn test_translate() {
        let mut pix = Pix::new(16, 16, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(0, 0, 1).unwrap();
        let pix: Pix = pix.into();

        let shifted = pix.translate(3, 2, InColor::Black);
        assert_eq!(shifted.get_pixel(3, 2), Some(1));
        assert_eq!(shifted.get_pixel(0, 0), Some(0));
    }
}
