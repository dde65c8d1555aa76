//! Fixed batch parameters. The file names, the number of columns and the
//! target height are part of the tool, not user settings.

/// Height every padded column is normalized to.
pub const TARGET_HEIGHT: u32 = 515;

/// Number of column images in a batch.
pub const COLUMN_COUNT: u32 = 8;

pub const INPUT_STEM: &str = "column_";
pub const OUTPUT_SUFFIX: &str = "_padded";
pub const IMAGE_EXTENSION: &str = "png";
