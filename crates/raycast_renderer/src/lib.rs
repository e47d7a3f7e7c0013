//! Raycast Renderer - CPU ray casting
//!
//! Casts one ray per pixel from a pinhole camera at the origin, finds the
//! nearest sphere or plane it hits and writes that object's flat color.
//! Output is a plain-text PPM image.

mod camera;
mod hittable;
mod plane;
mod ppm;
mod renderer;
mod sphere;

pub use camera::PinholeCamera;
pub use hittable::{closest_hit, Hittable};
pub use ppm::{save_ppm, write_ppm, WriteError};
pub use renderer::{color_to_rgb, ray_color, render, render_pixel, ImageBuffer, RenderConfig, Rgb};

/// Re-export scene and math types used in the public API
pub use raycast_core::{Camera, Color, Scene, SceneObject};
pub use raycast_math::{DVec3, Interval, Ray};
