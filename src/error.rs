//! Crate-level error type and `Result` alias.
//! Distinguishes missing inputs, decode failures, oversized inputs and
//! encode/write failures so callers can tell where a batch stopped.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input image not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to load image from {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {} is {height} px tall, taller than the {target} px target", path.display())]
    TooTall {
        path: PathBuf,
        height: u32,
        target: u32,
    },
}
