use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Open and decode a column image.
///
/// The format is sniffed from the file contents, so a non-image file with a
/// `.png` name fails as a decode error rather than an I/O error.
pub fn load_column_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissingInput {
            path: path.to_path_buf(),
        },
        _ => Error::ImageLoad {
            path: path.to_path_buf(),
            source: ImageError::IoError(e),
        },
    })?;

    let image = reader
        .with_guessed_format()
        .map_err(|e| Error::ImageLoad {
            path: path.to_path_buf(),
            source: ImageError::IoError(e),
        })?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_as_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("column_1.png");
        match load_column_image(&path) {
            Err(Error::MissingInput { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("column_1.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_column_image(&path),
            Err(Error::ImageLoad { .. })
        ));
    }

    #[test]
    fn loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("column_1.png");
        image::RgbImage::new(3, 4).save(&path).unwrap();
        let image = load_column_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (3, 4));
    }
}
