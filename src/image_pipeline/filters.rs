//! Pipeline orchestration module
//!
//! Wires the normalize and blur stages behind a single configurable
//! entry point.

pub mod pipeline;
pub mod types;


pub use pipeline::BlurPipeline;
pub use types::{FilterConfig, FilterConfigBuilder};
