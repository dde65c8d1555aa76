//! High-level library API: pad one column or the whole batch, in the current
//! working directory or an explicit one. The batch is fail-fast: the first
//! error stops it and leaves already written outputs in place.
use std::path::{Path, PathBuf};

use image::GenericImageView;
use tracing::info;

use crate::core::params::TARGET_HEIGHT;
use crate::core::processing::padding::pad_to_height;
use crate::error::{Error, Result};
use crate::io::load_column_image;
use crate::io::writers::png::write_png;
use crate::types::{ColumnId, PaddingSpec};

/// Outcome of padding a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedColumn {
    pub column: ColumnId,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub padding: PaddingSpec,
}

/// Result of a completed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub outputs: Vec<PathBuf>,
}

/// Load `column_{i}.png` from `dir`, pad it to the target height and write
/// `column_{i}_padded.png` next to it.
pub fn pad_column(dir: &Path, column: ColumnId) -> Result<PaddedColumn> {
    let input = dir.join(column.input_file_name());
    let output = dir.join(column.output_file_name());

    let image = load_column_image(&input)?;
    let (padded, padding) =
        pad_to_height(&image, TARGET_HEIGHT).ok_or_else(|| Error::TooTall {
            path: input.clone(),
            height: image.height(),
            target: TARGET_HEIGHT,
        })?;
    drop(image);

    write_png(&output, &padded)?;

    let (width, height) = padded.dimensions();
    info!(
        "Padded {}: {:?} -> {:?} ({}x{}, top={}, bottom={})",
        column, input, output, width, height, padding.top, padding.bottom
    );

    Ok(PaddedColumn {
        column,
        output,
        width,
        height,
        padding,
    })
}

/// Pad every column in `dir`, in order, stopping at the first error.
pub fn pad_all_in(dir: &Path) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for column in ColumnId::all() {
        let padded = pad_column(dir, column)?;
        report.processed += 1;
        report.outputs.push(padded.output);
    }
    Ok(report)
}

/// Pad every column in the current working directory.
pub fn pad_all() -> Result<BatchReport> {
    pad_all_in(Path::new("."))
}
