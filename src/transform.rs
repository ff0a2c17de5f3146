//! The pure pixel pipeline.
//!
//! [`apply`] is a function from image to image with no I/O, so every stage
//! can be exercised in tests on synthetic buffers. Stage order is fixed:
//!
//! 1. Normalize to 8-bit RGB. Grayscale, palette, alpha, 16-bit, and
//!    float inputs all land on the same three-channel layout, so every
//!    downstream consumer of the dataset sees one pixel format.
//! 2. Center crop (optional): the largest centered square, side
//!    `min(width, height)`.
//! 3. Rotate (optional): one quarter turn counter-clockwise.
//! 4. Resize to exactly the configured target with the configured kernel.
//!
//! The crop geometry lives in [`center_crop_rect`], a pure calculation
//! that is unit-tested separately from any pixel data.

use crate::config::TransformConfig;
use image::DynamicImage;

/// Run the full pipeline over one decoded image.
pub fn apply(image: DynamicImage, config: &TransformConfig) -> DynamicImage {
    let mut image = normalize_rgb(image);

    if config.center_crop {
        let (x, y, side) = center_crop_rect(image.width(), image.height());
        image = image.crop_imm(x, y, side, side);
    }

    if config.rotate {
        // rotate270 is the 90 degree counter-clockwise quarter turn.
        image = image.rotate270();
    }

    image.resize_exact(config.width, config.height, config.filter.filter_type())
}

/// Convert to 8-bit RGB unless the image is already exactly that.
fn normalize_rgb(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// The largest centered square region of a `width` × `height` image.
///
/// Returns `(x, y, side)` with `side = min(width, height)` and the offsets
/// floor-divided, so an odd margin leaves the extra pixel on the
/// right/bottom. The region always fits: `x + side <= width` and
/// `y + side <= height`.
pub fn center_crop_rect(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}
