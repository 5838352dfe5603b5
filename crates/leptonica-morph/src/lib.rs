//! Binary morphology on top of [`leptonica_core`]'s packed-bitmap [`Pix`].
//!
//! This crate implements the standard binary morphological operator set —
//! dilation, erosion, the hit-miss transform, opening, closing, their
//! generalized (HMT-based) variants, and separable "brick" fast paths for
//! rectangular structuring elements — plus process-wide boundary-condition
//! control matching Leptonica's `MORPH_BC` convention.
//!
//! Every top-level operator takes an `Option<Pix>` destination, a source
//! [`Pix`], and a [`Sel`], and returns a freshly computed [`Pix`]; passing
//! `d = None`, a distinct `d`, or `d` aliased to the source all produce
//! identical results (see [`morph`] module docs for why).

pub mod boundary;
pub mod brick;
pub mod error;
pub mod morph;
pub mod sel;

pub use boundary::{get_morph_border_pixel_color, morph_boundary_condition, reset_morph_boundary_condition, MorphBc, MorphOpType};
pub use brick::{close_brick, close_safe_brick, dilate_brick, erode_brick, open_brick};
pub use error::{MorphError, MorphResult};
pub use morph::{close, close_generalized, close_safe, dilate, erode, hmt, open, open_generalized};
pub use sel::{Sel, SelElement};

pub use leptonica_core::Pix;
