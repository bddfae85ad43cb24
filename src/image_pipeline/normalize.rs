//! Bitmap normalization module
//!
//! Resolves orientation metadata and scaling into a canonical
//! top-left-origin bitmap, the layout the blur stage requires.

mod bilinear;
mod normalizer;
pub mod transform;

pub use bilinear::BilinearNormalizer;
pub use normalizer::BitmapNormalizer;
pub use transform::AffineTransform;
