//! Scene file support.
//!
//! This module reads scene description files, a restricted JSON dialect,
//! into a [`Scene`](crate::Scene).
//!
//! ## Supported Records
//!
//! - `camera`: `width`, `height` (view plane size)
//! - `sphere`: `position`, `radius`, `color`
//! - `plane`: `position`, `normal`, `color`
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::scene_file::load_scene;
//!
//! let scene = load_scene("path/to/scene.json")?;
//! println!("Loaded {} objects", scene.object_count());
//! ```

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
