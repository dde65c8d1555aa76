use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageError};

use crate::error::{Error, Result};

/// Encode `image` as PNG at `output`, replacing any existing file.
pub fn write_png(output: &Path, image: &DynamicImage) -> Result<()> {
    let save_err = |source: ImageError| Error::ImageSave {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(|e| save_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    image
        .write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(save_err)?;
    writer
        .flush()
        .map_err(|e| save_err(ImageError::IoError(e)))?;
    Ok(())
}
