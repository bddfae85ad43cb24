//! Bitmap and orientation data types

use crate::image_pipeline::common::error::{FilterError, Result};

/// Bytes per pixel in the canonical RGBA8 layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned, stride-free RGBA8 pixel buffer.
///
/// Row-major, no row padding (stride = width * 4), alpha premultiplied
/// into the color channels. Every stage of the pipeline consumes a
/// `Bitmap` and allocates a fresh one for its output; a produced
/// bitmap is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap an existing pixel buffer.
    ///
    /// The buffer length must be exactly `width * height * 4` and both
    /// dimensions must be at least 1.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions(width, height));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(FilterError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(FilterError::InvalidInput(format!(
                "buffer length {} does not match {}x{} RGBA ({} bytes)",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a transparent (all-zero) bitmap.
    ///
    /// Reserves through `try_reserve_exact` so a pathological canvas
    /// size surfaces as `AllocationFailure` instead of aborting.
    pub fn new_zeroed(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions(width, height));
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(FilterError::AllocationFailure(usize::MAX))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| FilterError::AllocationFailure(len))?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a bitmap filled with a single RGBA pixel value.
    pub fn filled(width: usize, height: usize, pixel: [u8; 4]) -> Result<Self> {
        let mut bitmap = Self::new_zeroed(width, height)?;
        for chunk in bitmap.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel);
        }
        Ok(bitmap)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel bytes, row-major RGBA.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the bitmap, returning its pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at (x, y). Panics if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let off = (y * self.width + x) * BYTES_PER_PIXEL;
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// One of the eight standard image orientations attached to a decoded
/// bitmap by the decode boundary. Consumed by the normalizer; a
/// normalized bitmap has no orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Row 0 top, column 0 left (identity).
    #[default]
    Up,
    /// Identity mirrored across the vertical axis.
    UpMirrored,
    /// Rotated 180 degrees.
    Down,
    /// 180 degrees mirrored (vertical flip).
    DownMirrored,
    /// Transposed (mirror + 90 degrees).
    LeftMirrored,
    /// Rotated 90 degrees clockwise.
    Right,
    /// Anti-transposed (mirror + 270 degrees).
    RightMirrored,
    /// Rotated 90 degrees counter-clockwise.
    Left,
}

impl Orientation {
    /// Whether this orientation exchanges the output width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Left | Self::LeftMirrored | Self::Right | Self::RightMirrored
        )
    }
}

impl TryFrom<u8> for Orientation {
    type Error = FilterError;

    /// Decode the EXIF orientation tag (values 1 through 8).
    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Up),
            2 => Ok(Self::UpMirrored),
            3 => Ok(Self::Down),
            4 => Ok(Self::DownMirrored),
            5 => Ok(Self::LeftMirrored),
            6 => Ok(Self::Right),
            7 => Ok(Self::RightMirrored),
            8 => Ok(Self::Left),
            other => Err(FilterError::InvalidInput(format!(
                "orientation value {} is outside the EXIF range 1..=8",
                other
            ))),
        }
    }
}
