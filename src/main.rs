use stackblur_rs::image_pipeline::{Bitmap, BlurPipeline, FilterConfig, Orientation};
use stackblur_rs::logger;

use anyhow::Result;
use tracing::{error, info};

/// Checkerboard test card with an opaque alpha channel.
fn test_card(width: usize, height: usize) -> Result<Bitmap> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let v = if (x / 16 + y / 16) % 2 == 0 { 230 } else { 25 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Ok(Bitmap::from_raw(width, height, data)?)
}

fn main() -> Result<()> {
    logger::init();

    info!("Starting stackblur demo...");

    let config = FilterConfig::builder().scale(1.0).radius(16).build();
    let pipeline = BlurPipeline::new(config);

    info!("Normalize + blur pipeline initialized");
    info!("Scale: {}", pipeline.config().scale);
    info!("Radius: {}", pipeline.config().radius);

    let source = test_card(512, 384)?;
    let started = std::time::Instant::now();
    match pipeline.process(&source, Orientation::Up) {
        Ok(blurred) => info!(
            width = blurred.width(),
            height = blurred.height(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Blur successful!"
        ),
        Err(e) => error!("Blur failed: {}", e),
    }

    Ok(())
}
