use tracing::debug;

use crate::image_pipeline::bitmap::{BYTES_PER_PIXEL, Bitmap, Orientation};
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::normalize::normalizer::BitmapNormalizer;
use crate::image_pipeline::normalize::transform::AffineTransform;

/// Bilinear resampling normalizer.
///
/// Builds one affine transform combining the requested scale, the
/// orientation's rotation/mirror, and the translation that re-anchors
/// the result at a top-left origin, then inverse-maps every output
/// pixel center to a source coordinate and samples bilinearly.
///
/// Sample taps outside the source bounds contribute transparent
/// (all-zero premultiplied) pixels rather than a clamped edge pixel,
/// so upscaled or rotated content fades out at the boundary instead of
/// smearing.
pub struct BilinearNormalizer;

impl BilinearNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BilinearNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BitmapNormalizer for BilinearNormalizer {
    fn normalize(&self, source: &Bitmap, orientation: Orientation, scale: f64) -> Result<Bitmap> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FilterError::InvalidInput(format!(
                "scale must be a positive finite number, got {scale}"
            )));
        }

        let src_w = source.width();
        let src_h = source.height();
        let scaled_w = (src_w as f64 * scale).round() as usize;
        let scaled_h = (src_h as f64 * scale).round() as usize;
        if scaled_w == 0 || scaled_h == 0 {
            return Err(FilterError::InvalidDimensions(scaled_w, scaled_h));
        }

        let (out_w, out_h) = if orientation.swaps_axes() {
            (scaled_h, scaled_w)
        } else {
            (scaled_w, scaled_h)
        };

        debug!(
            src_w,
            src_h,
            out_w,
            out_h,
            scale,
            ?orientation,
            "Normalizing bitmap"
        );

        let forward = AffineTransform::scaling(scale, scale).then(
            &AffineTransform::for_orientation(orientation, scaled_w as f64, scaled_h as f64),
        );
        // scale > 0 and orientations are rigid, so the forward transform
        // is always invertible.
        let inverse = forward.invert().ok_or_else(|| {
            FilterError::InvalidInput("normalization transform is singular".to_string())
        })?;

        let mut output = Bitmap::new_zeroed(out_w, out_h)?;
        let out_data = output.data_mut();

        for oy in 0..out_h {
            let row_off = oy * out_w * BYTES_PER_PIXEL;
            for ox in 0..out_w {
                let (sx, sy) = inverse.apply(ox as f64 + 0.5, oy as f64 + 0.5);
                let pixel = sample_bilinear(source, sx - 0.5, sy - 0.5);
                let off = row_off + ox * BYTES_PER_PIXEL;
                out_data[off..off + BYTES_PER_PIXEL].copy_from_slice(&pixel);
            }
        }

        Ok(output)
    }
}

/// Bilinear sample at pixel-grid coordinates (integer coordinates land
/// exactly on pixel centers). Out-of-bounds taps are transparent.
fn sample_bilinear(source: &Bitmap, gx: f64, gy: f64) -> [u8; 4] {
    let x0 = gx.floor();
    let y0 = gy.floor();
    let fx = gx - x0;
    let fy = gy - y0;
    let x0 = x0 as isize;
    let y0 = y0 as isize;

    let p00 = tap(source, x0, y0);
    let p10 = tap(source, x0 + 1, y0);
    let p01 = tap(source, x0, y0 + 1);
    let p11 = tap(source, x0 + 1, y0 + 1);

    let mut pixel = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] * (1.0 - fx) + p10[c] * fx;
        let bottom = p01[c] * (1.0 - fx) + p11[c] * fx;
        let value = top * (1.0 - fy) + bottom * fy;
        pixel[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    pixel
}

fn tap(source: &Bitmap, x: isize, y: isize) -> [f64; 4] {
    if x < 0 || y < 0 || x as usize >= source.width() || y as usize >= source.height() {
        return [0.0; 4];
    }
    let p = source.pixel(x as usize, y as usize);
    [p[0] as f64, p[1] as f64, p[2] as f64, p[3] as f64]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_bitmap(width: usize, height: usize) -> Bitmap {
        let mut data = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                let v = ((x * 40 + y * 10) % 256) as u8;
                data.extend_from_slice(&[v, v.wrapping_add(3), v.wrapping_add(7), 255]);
            }
        }
        Bitmap::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_identity_orientation_is_exact_copy() {
        let source = gradient_bitmap(5, 3);
        let normalizer = BilinearNormalizer::new();
        let result = normalizer
            .normalize(&source, Orientation::Up, 1.0)
            .unwrap();
        assert_eq!(result, source);
    }

    #[test]
    fn test_default_variant_matches_scale_one() {
        let source = gradient_bitmap(4, 4);
        let normalizer = BilinearNormalizer::new();
        let a = normalizer.normalize_default(&source, Orientation::Down).unwrap();
        let b = normalizer
            .normalize(&source, Orientation::Down, 1.0)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let source = gradient_bitmap(5, 3);
        let normalizer = BilinearNormalizer::new();
        let rotated = normalizer
            .normalize(&source, Orientation::Right, 1.0)
            .unwrap();
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 5);
    }

    #[test]
    fn test_rotation_moves_pixels_exactly() {
        // At scale 1.0 a 90-degree rotation maps pixel centers onto
        // pixel centers, so no interpolation happens at all.
        let source = gradient_bitmap(4, 2);
        let normalizer = BilinearNormalizer::new();
        let rotated = normalizer
            .normalize(&source, Orientation::Right, 1.0)
            .unwrap();
        for y in 0..2 {
            for x in 0..4 {
                // (x, y) rotated 90 degrees clockwise lands at (h-1-y, x).
                assert_eq!(rotated.pixel(2 - 1 - y, x), source.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_rotation_round_trip_restores_bitmap() {
        let source = gradient_bitmap(5, 3);
        let normalizer = BilinearNormalizer::new();
        let rotated = normalizer
            .normalize(&source, Orientation::Right, 1.0)
            .unwrap();
        let restored = normalizer
            .normalize(&rotated, Orientation::Left, 1.0)
            .unwrap();
        assert_eq!(restored, source);
    }

    #[test]
    fn test_mirror_flips_rows() {
        let source = gradient_bitmap(4, 2);
        let normalizer = BilinearNormalizer::new();
        let mirrored = normalizer
            .normalize(&source, Orientation::UpMirrored, 1.0)
            .unwrap();
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(mirrored.pixel(3 - x, y), source.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_scale_changes_canvas_size() {
        let source = gradient_bitmap(4, 4);
        let normalizer = BilinearNormalizer::new();
        let doubled = normalizer
            .normalize(&source, Orientation::Up, 2.0)
            .unwrap();
        assert_eq!(doubled.width(), 8);
        assert_eq!(doubled.height(), 8);
        let halved = normalizer
            .normalize(&source, Orientation::Up, 0.5)
            .unwrap();
        assert_eq!(halved.width(), 2);
        assert_eq!(halved.height(), 2);
    }

    #[test]
    fn test_upscale_interior_of_uniform_image_is_uniform() {
        let source = Bitmap::filled(4, 4, [120, 60, 30, 255]).unwrap();
        let normalizer = BilinearNormalizer::new();
        let doubled = normalizer
            .normalize(&source, Orientation::Up, 2.0)
            .unwrap();
        // Interior pixels have all four taps inside the source.
        assert_eq!(doubled.pixel(4, 4), [120, 60, 30, 255]);
        // Border pixels pick up transparent taps from outside.
        assert!(doubled.pixel(0, 0)[3] < 255);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let source = gradient_bitmap(2, 2);
        let normalizer = BilinearNormalizer::new();
        assert!(matches!(
            normalizer
                .normalize(&source, Orientation::Up, 0.0)
                .unwrap_err(),
            FilterError::InvalidInput(_)
        ));
        assert!(normalizer
            .normalize(&source, Orientation::Up, f64::NAN)
            .is_err());
    }

    #[test]
    fn test_rejects_degenerate_scaled_output() {
        let source = gradient_bitmap(2, 2);
        let normalizer = BilinearNormalizer::new();
        assert!(matches!(
            normalizer
                .normalize(&source, Orientation::Up, 0.01)
                .unwrap_err(),
            FilterError::InvalidDimensions(0, 0)
        ));
    }
}
