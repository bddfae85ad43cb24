use crate::image_pipeline::bitmap::{Bitmap, Orientation};
use crate::image_pipeline::common::error::Result;

/// Normalization stage of the pipeline: turns an arbitrarily oriented,
/// arbitrarily scaled source bitmap into a canonical top-left-origin
/// bitmap the blur stage can consume.
pub trait BitmapNormalizer {
    fn normalize(&self, source: &Bitmap, orientation: Orientation, scale: f64) -> Result<Bitmap>;

    /// Normalization at the source's native size.
    fn normalize_default(&self, source: &Bitmap, orientation: Orientation) -> Result<Bitmap> {
        self.normalize(source, orientation, 1.0)
    }
}
