use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported blur radius {radius}: divisor table covers 0..={max}")]
    UnsupportedRadius { radius: u32, max: u32 },

    #[error("Failed to allocate output buffer of {0} bytes")]
    AllocationFailure(usize),
}

pub type Result<T> = std::result::Result<T, FilterError>;
