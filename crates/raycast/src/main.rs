//! raycast: render a scene file of spheres and planes to a PPM image.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use raycast_core::{load_scene_with_camera, Camera};
use raycast_renderer::{render, save_ppm, RenderConfig};

/// Largest image the renderer will allocate, in pixels.
const MAX_PIXELS: u64 = 1 << 28;

#[derive(Parser, Debug)]
#[command(name = "raycast")]
#[command(version)]
#[command(about = "Ray cast a scene of spheres and planes into a plain-text PPM image")]
struct Cli {
    /// Output image width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Output image height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Scene description file
    input: PathBuf,

    /// Output image file
    output: PathBuf,

    /// Largest channel value written to the image
    #[arg(long, default_value_t = 255, value_parser = clap::value_parser!(u16).range(1..))]
    max_color: u16,

    /// View plane width used when the scene declares no camera
    #[arg(long, default_value_t = 1.0)]
    view_width: f64,

    /// View plane height used when the scene declares no camera
    #[arg(long, default_value_t = 1.0)]
    view_height: f64,
}

/// Reject images too large to hold in memory.
fn check_image_size(width: u32, height: u32) -> Result<()> {
    let pixels = u64::from(width).checked_mul(u64::from(height));
    ensure!(
        matches!(pixels, Some(n) if n <= MAX_PIXELS),
        "Image size {}x{} exceeds the limit of {} pixels",
        width,
        height,
        MAX_PIXELS
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting raycast");

    check_image_size(cli.width, cli.height)?;

    let camera = Camera::new(cli.view_width, cli.view_height);
    let scene = load_scene_with_camera(&cli.input, camera)
        .with_context(|| format!("Failed to load scene {}", cli.input.display()))?;

    let config = RenderConfig {
        max_color: cli.max_color,
    };
    let image = render(&scene, cli.width, cli.height, &config);

    save_ppm(&image, &cli.output)?;

    Ok(())
}
