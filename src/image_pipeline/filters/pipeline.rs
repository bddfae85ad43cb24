use tracing::{info, instrument};

use crate::image_pipeline::{
    bitmap::{Bitmap, Orientation},
    blur::{BlurFilter, StackBlurFilter},
    common::error::{FilterError, Result},
    filters::types::FilterConfig,
    normalize::{BilinearNormalizer, BitmapNormalizer},
};

/// Normalize-then-blur pipeline.
///
/// Wires a [`BitmapNormalizer`] and a [`BlurFilter`] behind one entry
/// point: the caller hands in a decoded bitmap plus its orientation
/// metadata and receives a canonical blurred bitmap. Both stages are
/// pure transforms, so a failed call leaves nothing to clean up.
pub struct BlurPipeline<N: BitmapNormalizer, F: BlurFilter> {
    normalizer: N,
    filter: F,
    config: FilterConfig,
}

impl BlurPipeline<BilinearNormalizer, StackBlurFilter> {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            normalizer: BilinearNormalizer::new(),
            filter: StackBlurFilter::new(),
            config,
        }
    }
}

impl<N: BitmapNormalizer, F: BlurFilter> BlurPipeline<N, F> {
    pub fn with_custom(normalizer: N, filter: F, config: FilterConfig) -> Self {
        Self {
            normalizer,
            filter,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, source), fields(width = source.width(), height = source.height()))]
    pub fn process(&self, source: &Bitmap, orientation: Orientation) -> Result<Bitmap> {
        info!("Starting normalize + blur pipeline");

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = source.width(),
                height = source.height()
            )
            .entered();
            self.validate_dimensions(source.width(), source.height())?;
        }

        let normalized = {
            let _span = tracing::info_span!("normalize", scale = self.config.scale).entered();
            self.normalizer
                .normalize(source, orientation, self.config.scale)?
        };

        let blurred = {
            let _span = tracing::info_span!("stack_blur", radius = self.config.radius).entered();
            self.filter.blur(&normalized, self.config.radius)?
        };

        info!(
            width = blurred.width(),
            height = blurred.height(),
            "Pipeline complete"
        );
        Ok(blurred)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FilterConfig) {
        self.config = config;
    }
}
