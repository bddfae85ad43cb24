//! Pipeline configuration types

/// Configuration for a normalize-then-blur run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Scale factor applied during normalization (must be > 0).
    pub scale: f64,
    /// Blur radius; 0 leaves the normalized bitmap untouched.
    pub radius: u32,
    /// Whether to validate source dimensions before processing.
    pub validate_dimensions: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            radius: 0,
            validate_dimensions: true,
        }
    }
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }
}

/// Builder for FilterConfig
#[derive(Default)]
pub struct FilterConfigBuilder {
    scale: Option<f64>,
    radius: Option<u32>,
    validate_dimensions: Option<bool>,
}

impl FilterConfigBuilder {
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> FilterConfig {
        let default = FilterConfig::default();
        FilterConfig {
            scale: self.scale.unwrap_or(default.scale),
            radius: self.radius.unwrap_or(default.radius),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
