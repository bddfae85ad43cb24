//! 2D affine transform support for bitmap normalization.
//!
//! Six-component matrix in the classic AGG layout:
//!
//! ```text
//!   | sx  shx tx |
//!   | shy  sy ty |
//!   |  0    0  1 |
//! ```
//!
//! Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`,
//! with a top-left origin and +Y pointing down.

use crate::image_pipeline::bitmap::Orientation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn scaling(x: f64, y: f64) -> Self {
        Self {
            sx: x,
            shy: 0.0,
            shx: 0.0,
            sy: y,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: x,
            ty: y,
        }
    }

    /// The transform that re-orients a `width` x `height` canvas into
    /// canonical top-left display coordinates. Rotation and mirror are
    /// already combined with the translation that anchors the result
    /// back at the origin, so axis-swapping orientations land on a
    /// `height` x `width` canvas.
    pub fn for_orientation(orientation: Orientation, width: f64, height: f64) -> Self {
        let (w, h) = (width, height);
        match orientation {
            Orientation::Up => Self::identity(),
            // x' = w - x
            Orientation::UpMirrored => Self {
                sx: -1.0,
                shy: 0.0,
                shx: 0.0,
                sy: 1.0,
                tx: w,
                ty: 0.0,
            },
            // x' = w - x, y' = h - y
            Orientation::Down => Self {
                sx: -1.0,
                shy: 0.0,
                shx: 0.0,
                sy: -1.0,
                tx: w,
                ty: h,
            },
            // y' = h - y
            Orientation::DownMirrored => Self {
                sx: 1.0,
                shy: 0.0,
                shx: 0.0,
                sy: -1.0,
                tx: 0.0,
                ty: h,
            },
            // transpose: x' = y, y' = x
            Orientation::LeftMirrored => Self {
                sx: 0.0,
                shy: 1.0,
                shx: 1.0,
                sy: 0.0,
                tx: 0.0,
                ty: 0.0,
            },
            // 90 degrees clockwise: x' = h - y, y' = x
            Orientation::Right => Self {
                sx: 0.0,
                shy: 1.0,
                shx: -1.0,
                sy: 0.0,
                tx: h,
                ty: 0.0,
            },
            // anti-transpose: x' = h - y, y' = w - x
            Orientation::RightMirrored => Self {
                sx: 0.0,
                shy: -1.0,
                shx: -1.0,
                sy: 0.0,
                tx: h,
                ty: w,
            },
            // 90 degrees counter-clockwise: x' = y, y' = w - x
            Orientation::Left => Self {
                sx: 0.0,
                shy: -1.0,
                shx: 1.0,
                sy: 0.0,
                tx: 0.0,
                ty: w,
            },
        }
    }

    /// Compose so that `self` applies first, then `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self {
            sx: self.sx * next.sx + self.shy * next.shx,
            shy: self.sx * next.shy + self.shy * next.sy,
            shx: self.shx * next.sx + self.sy * next.shx,
            sy: self.shx * next.shy + self.sy * next.sy,
            tx: self.tx * next.sx + self.ty * next.shx + next.tx,
            ty: self.tx * next.shy + self.ty * next.sy + next.ty,
        }
    }

    /// Inverse transform. Returns `None` for a singular matrix.
    pub fn invert(&self) -> Option<Self> {
        let det = self.sx * self.sy - self.shy * self.shx;
        if det.abs() < f64::EPSILON {
            return None;
        }
        let d = 1.0 / det;
        let sx = self.sy * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        let sy = self.sx * d;
        Some(Self {
            sx,
            shy,
            shx,
            sy,
            tx: -(self.tx * sx + self.ty * shx),
            ty: -(self.tx * shy + self.ty * sy),
        })
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.sx + y * self.shx + self.tx,
            x * self.shy + y * self.sy + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: (f64, f64), b: (f64, f64)) {
        assert!((a.0 - b.0).abs() < 1e-9, "{a:?} vs {b:?}");
        assert!((a.1 - b.1).abs() < 1e-9, "{a:?} vs {b:?}");
    }

    #[test]
    fn test_then_applies_in_order() {
        let scale = AffineTransform::scaling(2.0, 2.0);
        let shift = AffineTransform::translation(10.0, 0.0);
        let combined = scale.then(&shift);
        assert_close(combined.apply(3.0, 4.0), (16.0, 8.0));
    }

    #[test]
    fn test_invert_round_trip() {
        let t = AffineTransform::scaling(2.0, 0.5)
            .then(&AffineTransform::translation(7.0, -3.0));
        let inv = t.invert().unwrap();
        let (x, y) = t.apply(1.25, 4.75);
        assert_close(inv.apply(x, y), (1.25, 4.75));
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        let t = AffineTransform::scaling(0.0, 1.0);
        assert!(t.invert().is_none());
    }

    #[test]
    fn test_rotate_right_maps_corners() {
        // 4x2 canvas rotated 90 degrees clockwise lands on a 2x4 canvas.
        let t = AffineTransform::for_orientation(Orientation::Right, 4.0, 2.0);
        assert_close(t.apply(0.0, 0.0), (2.0, 0.0));
        assert_close(t.apply(4.0, 0.0), (2.0, 4.0));
        assert_close(t.apply(0.0, 2.0), (0.0, 0.0));
    }

    #[test]
    fn test_mirror_keeps_canvas() {
        let t = AffineTransform::for_orientation(Orientation::UpMirrored, 4.0, 2.0);
        assert_close(t.apply(0.0, 1.0), (4.0, 1.0));
        assert_close(t.apply(4.0, 1.0), (0.0, 1.0));
    }
}
