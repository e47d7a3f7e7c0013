//! Scene file loading.
//!
//! Reads a scene file from disk and hands its contents to the parser.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::{Camera, Scene};
use crate::scene_file::parser::{parse_scene_with_camera, ParseError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file using the default camera.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    load_scene_with_camera(path, Camera::default())
}

/// Load a scene file, using `camera` when the file declares none.
///
/// The scene is named after the file stem.
pub fn load_scene_with_camera<P: AsRef<Path>>(path: P, camera: Camera) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut scene = parse_scene_with_camera(&content, camera)?;
    scene.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed")
        .to_string();

    log::info!(
        "Loaded scene \"{}\": {} objects ({} spheres, {} planes)",
        scene.name,
        scene.object_count(),
        scene.sphere_count(),
        scene.plane_count()
    );

    Ok(scene)
}
