//! PIX - The packed-bitmap image container
//!
//! `Pix` is the fundamental image type. It owns a contiguous buffer of
//! 32-bit words, one row per image line, padded so every row starts on a
//! word boundary. Pixels are packed MSB-first within each word.

mod access;
mod border;
pub mod rop;

pub use access::*;
pub use rop::{InColor, RopOp};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel).
///
/// The morphology kernel in this crate only operates on [`PixelDepth::Bit1`]
/// images; the other variants exist so that depth mismatches can be reported
/// precisely and so that [`crate::pix::rop::get_morph_border_pixel_color`]
/// can validate its `depth` argument the way the original C API does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binary image
    Bit1 = 1,
    /// 2-bit image (4 levels)
    Bit2 = 2,
    /// 4-bit image (16 levels)
    Bit4 = 4,
    /// 8-bit grayscale or indexed color
    Bit8 = 8,
    /// 16-bit grayscale
    Bit16 = 16,
    /// 32-bit RGB or RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Create a `PixelDepth` from a raw bit count.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(PixelDepth::Bit1),
            2 => Ok(PixelDepth::Bit2),
            4 => Ok(PixelDepth::Bit4),
            8 => Ok(PixelDepth::Bit8),
            16 => Ok(PixelDepth::Bit16),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        if self.bits() == 32 {
            0xFFFFFFFF
        } else {
            (1u32 << self.bits()) - 1
        }
    }
}

/// Internal PIX data.
#[derive(Debug)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 32-bit words per line.
    wpl: u32,
    /// Packed pixel data, `height * wpl` words.
    data: Vec<u32>,
}

/// PIX - packed-bitmap image container.
///
/// `Pix` uses reference counting via `Arc` for cheap cloning: [`Pix::clone`]
/// shares the underlying buffer, while [`Pix::deep_clone`] (or
/// [`Pix::to_mut`]) makes an independent copy. This is the mechanism the
/// morphology kernel relies on to implement its new/into/in-place calling
/// modes without pointer-identity checks.
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to all-zero (background) bits.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let wpl = Self::compute_wpl(width, depth);
        let data = vec![0u32; (wpl as usize) * (height as usize)];

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth,
                wpl,
                data,
            }),
        })
    }

    /// Compute words per line for given width and depth.
    #[inline]
    fn compute_wpl(width: u32, depth: PixelDepth) -> u32 {
        (width * depth.bits()).div_ceil(32)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX's storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get a read-only slice of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height()`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        &self.inner.data[start..start + self.inner.wpl as usize]
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()`, which shares storage via `Arc`, this always produces
    /// an independently-owned buffer.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(PixData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                wpl: self.inner.wpl,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Create a new all-zero PIX with the same dimensions and depth as
    /// `self` ("create template").
    pub fn create_template(&self) -> Self {
        Pix::new(self.width(), self.height(), self.depth())
            .expect("dimensions of an existing Pix are always valid")
    }

    /// Overwrite this PIX's pixel storage with a copy of `other`'s.
    ///
    /// Requires matching dimensions and depth.
    pub fn copy_from(&self, other: &Pix) -> Result<Pix> {
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
        Ok(other.deep_clone())
    }

    /// Report whether two PIXes have identical dimensions (depth not
    /// compared).
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the storage.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always allocates a new, independent buffer.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                wpl: self.inner.wpl,
                data: self.inner.data.clone(),
            },
        }
    }

    /// Bit-for-bit equality of two same-depth images (pad bits ignored,
    /// since they are never set by any operation in this crate).
    pub fn equals(&self, other: &Pix) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.depth() == other.depth()
            && self.data() == other.data()
    }
}

/// Mutable PIX.
///
/// Allows modification of image data; convert back to an immutable [`Pix`]
/// with `.into()`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get a read-only slice of a specific row.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        &self.inner.data[start..start + self.inner.wpl as usize]
    }

    /// Get a mutable slice of a specific row.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }

    /// Set all pixels to one ("set_all").
    pub fn set_all(&mut self) {
        self.inner.data.fill(0xFFFFFFFF);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
