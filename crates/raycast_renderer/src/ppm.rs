//! Plain-text PPM (P3) output.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Could not write \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `image` as a P3 PPM: a three line header, then one `r g b` line per pixel.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "{}", image.max_color)?;

    for [r, g, b] in &image.pixels {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save `image` to `path`.
///
/// The image is staged in a uniquely named temporary file in the same
/// directory and persisted over `path` once complete, so `path` never holds
/// a partial image. A failed save leaves no staging file behind.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), WriteError> {
    let path = path.as_ref();

    write_file(image, path).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Saved {}x{} image to {}",
        image.width,
        image.height,
        path.display()
    );

    Ok(())
}

fn write_file(image: &ImageBuffer, path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_ppm(image, &mut writer)?;
        writer.flush()?;
    }

    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
