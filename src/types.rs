//! Shared types: the per-side `PaddingSpec` and the `ColumnId` that names
//! each input/output file pair.
use std::fmt;

use crate::core::params::{COLUMN_COUNT, IMAGE_EXTENSION, INPUT_STEM, OUTPUT_SUFFIX};

/// Border pixels to add on each side of an image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PaddingSpec {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PaddingSpec {
    /// Vertical-only padding that brings `height` up to `target`.
    ///
    /// The odd pixel, if any, goes to the bottom. Returns `None` when
    /// `height` already exceeds `target`.
    pub fn vertical(height: u32, target: u32) -> Option<Self> {
        let delta = target.checked_sub(height)?;
        let top = delta / 2;
        Some(Self {
            left: 0,
            top,
            right: 0,
            bottom: delta - top,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

impl fmt::Display for PaddingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={}, top={}, right={}, bottom={}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// One of the fixed column images, numbered from 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct ColumnId(u32);

impl ColumnId {
    pub fn new(index: u32) -> Option<Self> {
        (1..=COLUMN_COUNT).contains(&index).then_some(Self(index))
    }

    /// All columns in processing order.
    pub fn all() -> impl Iterator<Item = ColumnId> {
        (1..=COLUMN_COUNT).map(ColumnId)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn input_file_name(self) -> String {
        format!("{}{}.{}", INPUT_STEM, self.0, IMAGE_EXTENSION)
    }

    pub fn output_file_name(self) -> String {
        format!("{}{}{}.{}", INPUT_STEM, self.0, OUTPUT_SUFFIX, IMAGE_EXTENSION)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_padding_puts_odd_pixel_at_bottom() {
        let spec = PaddingSpec::vertical(400, 515).unwrap();
        assert_eq!(
            spec,
            PaddingSpec {
                left: 0,
                top: 57,
                right: 0,
                bottom: 58
            }
        );
    }

    #[test]
    fn vertical_padding_even_delta_is_symmetric() {
        let spec = PaddingSpec::vertical(315, 515).unwrap();
        assert_eq!((spec.top, spec.bottom), (100, 100));
    }

    #[test]
    fn vertical_padding_at_target_is_empty() {
        assert!(PaddingSpec::vertical(515, 515).unwrap().is_empty());
    }

    #[test]
    fn vertical_padding_rejects_taller_images() {
        assert_eq!(PaddingSpec::vertical(516, 515), None);
    }

    #[test]
    fn column_ids_cover_one_through_eight() {
        let ids: Vec<u32> = ColumnId::all().map(ColumnId::index).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(ColumnId::new(0), None);
        assert_eq!(ColumnId::new(9), None);
    }

    #[test]
    fn column_file_names() {
        let id = ColumnId::new(3).unwrap();
        assert_eq!(id.input_file_name(), "column_3.png");
        assert_eq!(id.output_file_name(), "column_3_padded.png");
    }
}
