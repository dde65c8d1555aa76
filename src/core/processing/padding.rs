use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Primitive};
use tracing::debug;

use crate::types::PaddingSpec;

/// Opaque white for any pixel layout: every channel, alpha included, at its
/// maximum value.
pub fn white<P: Pixel>() -> P {
    let max = <P::Subpixel as Primitive>::DEFAULT_MAX_VALUE;
    let channels = vec![max; usize::from(P::CHANNEL_COUNT)];
    *P::from_slice(&channels)
}

/// Copy `src` onto a larger canvas filled with `fill`, offset by the
/// padding's left/top amounts.
pub fn expand_buffer<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    padding: PaddingSpec,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let (cols, rows) = src.dimensions();
    let out_cols = cols + padding.left + padding.right;
    let out_rows = rows + padding.top + padding.bottom;

    let channels = usize::from(P::CHANNEL_COUNT);
    let row_len = cols as usize * channels;
    let out_row_len = out_cols as usize * channels;
    let left_offset = padding.left as usize * channels;
    let top = padding.top as usize;

    let mut canvas = ImageBuffer::from_pixel(out_cols, out_rows, fill);
    let src_data = src.as_raw();
    let dst_data: &mut [P::Subpixel] = &mut canvas;
    // Row-wise slice copies; the fill already covers the border
    for row in 0..rows as usize {
        let src_offset = row * row_len;
        let dst_offset = (row + top) * out_row_len + left_offset;
        dst_data[dst_offset..dst_offset + row_len]
            .copy_from_slice(&src_data[src_offset..src_offset + row_len]);
    }
    canvas
}

fn expand_white<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    padding: PaddingSpec,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    expand_buffer(src, padding, white())
}

/// Add white borders to `image`, keeping its color mode.
///
/// Color modes without a direct counterpart are converted to RGBA8 first.
pub fn pad_image(image: &DynamicImage, padding: PaddingSpec) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(expand_white(buf, padding)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(expand_white(buf, padding)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(expand_white(buf, padding)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(expand_white(buf, padding)),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(expand_white(buf, padding)),
        DynamicImage::ImageLumaA16(buf) => {
            DynamicImage::ImageLumaA16(expand_white(buf, padding))
        }
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(expand_white(buf, padding)),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(expand_white(buf, padding)),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(expand_white(buf, padding)),
        DynamicImage::ImageRgba32F(buf) => {
            DynamicImage::ImageRgba32F(expand_white(buf, padding))
        }
        other => DynamicImage::ImageRgba8(expand_white(&other.to_rgba8(), padding)),
    }
}

/// Pad `image` vertically to exactly `target` rows.
///
/// Returns `None` if the image is already taller than `target`.
pub fn pad_to_height(image: &DynamicImage, target: u32) -> Option<(DynamicImage, PaddingSpec)> {
    let (cols, rows) = image.dimensions();
    let padding = PaddingSpec::vertical(rows, target)?;

    debug!(
        "Padding {}x{} to height {}: top={}, bottom={}",
        cols, rows, target, padding.top, padding.bottom
    );

    Some((pad_image(image, padding), padding))
}
