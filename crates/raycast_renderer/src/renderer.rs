//! Core ray casting renderer.
//!
//! Implements single-ray-per-pixel casting with:
//! - Closest-hit search over every scene object
//! - Flat per-object color, no shading
//! - Solid white background

use std::time::Instant;

use crate::hittable::closest_hit;
use crate::PinholeCamera;
use raycast_core::{Color, Scene, SceneObject};
use raycast_math::{Interval, Ray};

/// An RGB pixel with integer channels in [0, max_color].
pub type Rgb = [u16; 3];

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Largest channel value in the output image
    pub max_color: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_color: 255 }
    }
}

impl RenderConfig {
    /// Background pixel: the brightest value on every channel.
    pub fn background(&self) -> Rgb {
        [self.max_color; 3]
    }
}

/// Convert a color to integer channels.
///
/// Channels are scaled by `max_color`, clamped into range and truncated.
pub fn color_to_rgb(color: Color, max_color: u16) -> Rgb {
    let max = f64::from(max_color);
    let channel = Interval::new(0.0, max);
    color.to_array().map(|c| channel.clamp(c * max) as u16)
}

/// Compute the pixel seen by a ray.
pub fn ray_color(ray: &Ray, objects: &[SceneObject], config: &RenderConfig) -> Rgb {
    match closest_hit(objects, ray) {
        Some((_, object)) => color_to_rgb(object.color, config.max_color),
        None => config.background(),
    }
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &PinholeCamera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Rgb {
    let ray = camera.get_ray(x, y);
    ray_color(&ray, &scene.objects, config)
}

/// Row-major pixel buffer for render output.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub max_color: u16,
    pub pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32, max_color: u16) -> Self {
        Self {
            width,
            height,
            max_color,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> ImageBuffer {
    let camera = PinholeCamera::new(&scene.camera).with_resolution(width, height);
    let mut image = ImageBuffer::new(width, height, config.max_color);

    log::info!(
        "Rendering {}x{} with {} objects",
        width,
        height,
        scene.object_count()
    );
    let start = Instant::now();

    for y in 0..height {
        for x in 0..width {
            let rgb = render_pixel(&camera, scene, x, y, config);
            image.set(x, y, rgb);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    image
}
