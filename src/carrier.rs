//! # Carrier access
//!
//! Bridges a decoded `image::DynamicImage` to the flat raster sample buffer
//! the codec traverses. Only 8-bit grayscale, RGB, and RGBA images are
//! accepted as carriers; every other variant is rejected before the codec
//! reads or writes a single bit.

use crate::error::StegoError;
use image::DynamicImage;

/// Returns the number of channels per pixel of a supported carrier.
///
/// # Errors
///
/// Returns [`StegoError::UnsupportedFormat`] for any image that is not 8-bit
/// grayscale, RGB, or RGBA (extra alpha on grayscale, 16-bit and float
/// depths included).
pub fn channel_count(image: &DynamicImage) -> Result<usize, StegoError> {
    match image {
        DynamicImage::ImageLuma8(_) => Ok(1),
        DynamicImage::ImageRgb8(_) => Ok(3),
        DynamicImage::ImageRgba8(_) => Ok(4),
        other => Err(unsupported(other)),
    }
}

/// Read-only view of the raster sample buffer, row-major, one byte per
/// channel value.
pub fn samples(image: &DynamicImage) -> &[u8] {
    image.as_bytes()
}

/// Mutable view of the raster sample buffer of a supported carrier.
pub fn samples_mut(image: &mut DynamicImage) -> Result<&mut [u8], StegoError> {
    match image {
        DynamicImage::ImageLuma8(buffer) => Ok(&mut **buffer),
        DynamicImage::ImageRgb8(buffer) => Ok(&mut **buffer),
        DynamicImage::ImageRgba8(buffer) => Ok(&mut **buffer),
        other => Err(unsupported(other)),
    }
}

fn unsupported(image: &DynamicImage) -> StegoError {
    StegoError::UnsupportedFormat(format!("{:?}", image.color()))
}
