//! Image processing pipeline module
//!
//! This module provides a structured approach to bitmap normalization
//! and stack blurring, with separate modules for the pixel data model,
//! the normalizer, the blur filter, and pipeline orchestration.

pub mod bitmap;
pub mod blur;
pub mod common;
pub mod filters;
pub mod normalize;

pub use common::{FilterError, Result};

pub use bitmap::{BYTES_PER_PIXEL, Bitmap, Orientation};

pub use normalize::{AffineTransform, BilinearNormalizer, BitmapNormalizer};

pub use blur::{BlurFilter, DivisorTable, StackBlurFilter};

pub use filters::{BlurPipeline, FilterConfig, FilterConfigBuilder};
