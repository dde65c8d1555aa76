//! I/O layer: decoding column images from disk and writing padded results.
pub mod reader;
pub use reader::load_column_image;

pub mod writers;
