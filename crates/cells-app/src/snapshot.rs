//! Headless frame capture to PNG

use anyhow::{Context, Result};
use cells_core::RenderConfig;
use cells_field::{FieldRng, MotionModel};
use cells_render::{FrameRenderer, FrameView, BYTES_PER_PIXEL};

/// Advance the simulation `frames` steps, render once, and write a PNG.
pub fn run(config: &RenderConfig, seed: u32, frames: u32, output: &str) -> Result<()> {
    let mut rng = FieldRng::new(seed);
    let mut motion = MotionModel::spawn(config, &mut rng);
    for _ in 0..frames {
        motion.advance();
    }

    let pitch = config.width as usize * BYTES_PER_PIXEL;
    let mut bytes = vec![0u8; pitch * config.height as usize];
    {
        let mut frame = FrameView::new(&mut bytes, config.width, config.height, pitch)
            .context("Failed to build frame view")?;
        let mut renderer = FrameRenderer::new(config.mode, config.falloff_scale);
        renderer.render(&mut frame, motion.sources());
    }

    // Repack the B,G,R,X pixel slots into tightly packed RGB rows
    let mut rgb = Vec::with_capacity(config.width as usize * config.height as usize * 3);
    for y in 0..config.height as usize {
        for x in 0..config.width as usize {
            let i = y * pitch + x * BYTES_PER_PIXEL;
            rgb.push(bytes[i + 2]);
            rgb.push(bytes[i + 1]);
            rgb.push(bytes[i]);
        }
    }

    let img = image::RgbImage::from_raw(config.width, config.height, rgb)
        .context("Frame dimensions did not match pixel data")?;
    img.save(output)
        .with_context(|| format!("Failed to write {}", output))?;

    println!(
        "Wrote {} ({}x{}, {:?} mode, {} motion steps)",
        output, config.width, config.height, config.mode, frames
    );
    Ok(())
}
