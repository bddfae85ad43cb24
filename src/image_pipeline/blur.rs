//! Stack blur module
//!
//! Approximate Gaussian blur with per-pass cost independent of the
//! radius, plus the divisor table that replaces the per-pixel
//! division with a multiply and shift.

pub mod divisor;
mod filter;
mod stack_blur;

pub use divisor::DivisorTable;
pub use filter::BlurFilter;
pub use stack_blur::StackBlurFilter;
