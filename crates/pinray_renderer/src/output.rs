//! Writing rendered images to disk.
//!
//! `.ppm` files are written as ASCII P3 by hand; every other extension is
//! handed to the `image` crate, which picks the encoder from the extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ImageBuffer;
use thiserror::Error;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Write an image as ASCII PPM (P3).
///
/// Pixels are emitted row-major, top row first, one `r g b` triple per line.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

/// Save an image, choosing the format from the file extension.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(&mut writer, image)?;
        writer.flush()?;
    } else {
        let encoded = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
            .ok_or(OutputError::BufferSize {
                width: image.width,
                height: image.height,
            })?;
        encoded.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
