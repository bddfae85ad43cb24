//! Bitmap data model
//!
//! The canonical pixel format every pipeline stage agrees on:
//! premultiplied RGBA8, row-major, stride-free.

pub mod types;

pub use types::{BYTES_PER_PIXEL, Bitmap, Orientation};
