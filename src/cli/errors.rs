use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    Pad(#[from] colpad::Error),
}
