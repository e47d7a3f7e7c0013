//! Raycast Core - Scene model and scene file support.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneObject`, `Primitive`, `Camera`
//! - **Scene files**: parsing and loading of the JSON-like scene format
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::scene_file::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects ({} spheres, {} planes)",
//!     scene.object_count(),
//!     scene.sphere_count(),
//!     scene.plane_count());
//! ```

pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use scene::{Camera, Color, Plane, Primitive, Scene, SceneObject, Sphere};
pub use scene_file::{load_scene, load_scene_with_camera, parse_scene, parse_scene_with_camera};
