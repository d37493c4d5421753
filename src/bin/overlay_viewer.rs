use anyhow::{Context, Result};
use std::path::PathBuf;

use stance_analyzer::analyze_frame;
use stance_analyzer::config::Config;
use stance_analyzer::pose::PoseResult;
use stance_analyzer::render::{draw_overlay, FrameBuffer, MinifbRenderer, OverlayStyle};

const CONFIG_PATH: &str = "config.toml";

/// Usage: overlay_viewer <frame.png> <result.json> [output.png]
fn parse_args() -> Result<(PathBuf, PathBuf, Option<PathBuf>)> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        anyhow::bail!("Usage: {} <frame image> <result.json> [output.png]", args[0]);
    }
    Ok((
        PathBuf::from(&args[1]),
        PathBuf::from(&args[2]),
        args.get(3).map(PathBuf::from),
    ))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (frame_path, result_path, output) = parse_args()?;
    let config = Config::load_or_default(CONFIG_PATH);

    let frame = image::open(&frame_path)
        .with_context(|| format!("Failed to open frame {}", frame_path.display()))?
        .to_rgb8();
    let (width, height) = frame.dimensions();
    println!("Frame: {}x{}", width, height);

    let result = PoseResult::load(&result_path)?;
    let analysis = analyze_frame(&result, config.detection.body_index, config.metrics.reference_hip_cm)
        .context("Landmark detection failed. Try a different frame.")?;

    for entry in analysis.metrics.entries() {
        println!("  {}: {}", entry.name, entry.value);
    }

    let style = OverlayStyle::scaled(&config.overlay, config.overlay.zoom);
    let overlay = analysis.overlay(width, height, style);

    let mut buffer = FrameBuffer::from_rgb8(width as usize, height as usize, frame.as_raw());
    draw_overlay(&mut buffer, &overlay);

    if let Some(output) = output {
        image::save_buffer(&output, &buffer.to_rgb8(), width, height, image::ColorType::Rgb8)
            .with_context(|| format!("Failed to save {}", output.display()))?;
        println!("Saved: {}", output.display());
        return Ok(());
    }

    println!("Press ESC to exit");
    let mut renderer = MinifbRenderer::new("Stance Overlay", width as usize, height as usize)?;
    while renderer.is_open() {
        renderer.show(&buffer)?;
    }

    Ok(())
}
