use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::Result;

/// Blur stage of the pipeline: produces a new bitmap of identical
/// dimensions from a canonical input bitmap.
pub trait BlurFilter {
    fn blur(&self, source: &Bitmap, radius: u32) -> Result<Bitmap>;
}
