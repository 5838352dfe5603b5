//! Border operations
//!
//! Add or remove borders around images. Used by the morphology crate's
//! "safe" closing, which pads an image before closing with a brick SEL so
//! that the result is guaranteed to contain the original image.
//!
//! Corresponds to C Leptonica `border.c`.

use super::{Pix, RopOp};
use crate::error::{Error, Result};

impl Pix {
    /// Add a uniform border of `npix` pixels on all four sides, filled with
    /// `val`.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixAddBorder()` in `border.c`
    pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Add a border with a different size on each side, filled with `val`.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixAddBorderGeneral()` in `border.c`
    pub fn add_border_general(&self, left: u32, right: u32, top: u32, bot: u32, val: u32) -> Result<Pix> {
        let new_w = self.width() + left + right;
        let new_h = self.height() + top + bot;
        let mut result = Pix::new(new_w, new_h, self.depth())?.try_into_mut().unwrap();

        let max_val = self.depth().max_value();
        if val >= max_val {
            result.set_all();
        } else if val != 0 {
            for y in 0..new_h {
                for x in 0..new_w {
                    result.set_pixel_unchecked(x, y, val);
                }
            }
        }

        result.rasterop(
            left as i32,
            top as i32,
            self.width() as i32,
            self.height() as i32,
            RopOp::Src,
            self,
            0,
            0,
        );
        Ok(result.into())
    }

    /// Remove a uniform border of `npix` pixels from all four sides.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the border would leave an empty or
    /// negative-sized image.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixRemoveBorder()` in `border.c`
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a border with a different size on each side.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the border would leave an empty or
    /// negative-sized image.
    ///
    /// # See also
    ///
    /// C Leptonica: `pixRemoveBorderGeneral()` in `border.c`
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        if left + right >= w || top + bot >= h {
            return Err(Error::InvalidParameter(
                "border removal would leave an empty image".to_string(),
            ));
        }

        let new_w = w - left - right;
        let new_h = h - top - bot;
        let mut result = Pix::new(new_w, new_h, self.depth())?.try_into_mut().unwrap();
        result.rasterop(0, 0, new_w as i32, new_h as i32, RopOp::Src, self, left as i32, top as i32);
        Ok(result.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pix::PixelDepth;

    #[test]
    fn test_add_and_remove_border_roundtrip() {
        let mut pix = Pix::new(10, 10, PixelDepth::Bit1).unwrap().try_into_mut().unwrap();
        pix.set_pixel(3, 3, 1).unwrap();
        let pix: Pix = pix.into();

        let bordered = pix.add_border(4, 0).unwrap();
        assert_eq!(bordered.width(), 18);
        assert_eq!(bordered.height(), 18);
        assert_eq!(bordered.get_pixel(3 + 4, 3 + 4), Some(1));
        assert_eq!(bordered.get_pixel(0, 0), Some(0));

        let restored = bordered.remove_border(4).unwrap();
        assert!(restored.equals(&pix));
    }

    #[test]
    fn test_add_border_general_fills_with_value() {
        let pix = Pix::new(4, 4, PixelDepth::Bit1).unwrap();
        let bordered = pix.add_border_general(1, 2, 3, 0, 1).unwrap();
        assert_eq!(bordered.width(), 7);
        assert_eq!(bordered.height(), 7);
        // Top-left corner is in the padded region, filled with 1.
        assert_eq!(bordered.get_pixel(0, 0), Some(1));
        // Interior (offset by left=1, top=3) stays 0.
        assert_eq!(bordered.get_pixel(1, 3), Some(0));
    }

    #[test]
    fn test_remove_border_rejects_oversized_removal() {
        let pix = Pix::new(4, 4, PixelDepth::Bit1).unwrap();
        assert!(pix.remove_border(3).is_err());
    }
}
