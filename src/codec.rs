//! # Bit-level embedding and extraction
//!
//! The payload plus a terminating zero byte is written LSB-first into the
//! least-significant bit of each eligible channel value, pixel after pixel in
//! raster order. Extraction walks the carrier identically and stops as soon
//! as a full zero byte has been assembled.

use crate::carrier;
use crate::error::StegoError;
use image::DynamicImage;

/// Byte appended to every payload to mark its end during extraction.
///
/// A payload that itself contains a zero byte is embedded as-is but will be
/// recovered truncated at the first zero.
pub const TERMINATOR: u8 = 0x00;

/// Number of channels per pixel that carry payload bits.
///
/// The alpha channel of RGBA images is skipped: it is often uniform and
/// frequently flattened away by downstream tooling, so bits stored there are
/// wasted or fragile.
pub fn usable_channels(total: usize) -> Result<usize, StegoError> {
    match total {
        1 => Ok(1),
        3 => Ok(3),
        4 => Ok(3),
        other => Err(StegoError::UnsupportedFormat(format!(
            "{other} channels per pixel"
        ))),
    }
}

/// Total number of LSB slots the carrier offers.
pub fn capacity_bits(pixel_count: u64, usable: u64) -> u64 {
    pixel_count * usable
}

/// Verifies that the payload plus terminator fits into the carrier.
///
/// Runs before any bit is written; an exact fit succeeds.
pub fn check_capacity(
    pixel_count: u64,
    usable: u64,
    payload_len: u64,
) -> Result<(), StegoError> {
    let required = (payload_len + 1) * 8;
    let available = capacity_bits(pixel_count, usable);
    if available < required {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }
    Ok(())
}

/// Embeds `payload` into the least-significant bits of `image`, in place.
///
/// The format and capacity checks run to completion first, so a failed call
/// leaves the image untouched. On success exactly
/// `(payload.len() + 1) * 8` LSBs are overwritten and every other bit of
/// every channel is preserved.
pub fn hide(image: &mut DynamicImage, payload: &[u8]) -> Result<(), StegoError> {
    let channels = carrier::channel_count(image)?;
    let usable = usable_channels(channels)?;
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    check_capacity(pixel_count, usable as u64, payload.len() as u64)?;

    write_bits(carrier::samples_mut(image)?, channels, usable, payload);
    Ok(())
}

/// Extracts a hidden payload from `image`.
///
/// Returns `Ok(None)` when the whole carrier is scanned without ever
/// assembling a zero byte. That outcome cannot be told apart from a payload
/// destroyed by recompression; it is a valid result, not an error.
pub fn reveal(image: &DynamicImage) -> Result<Option<Vec<u8>>, StegoError> {
    let channels = carrier::channel_count(image)?;
    let usable = usable_channels(channels)?;
    Ok(read_bits(carrier::samples(image), channels, usable))
}

// A single flattened bit position drives the traversal: bit `pos` lands in
// pixel `pos / usable`, channel `pos % usable`. The writer and reader share
// this mapping, which is what keeps them symmetric.
fn write_bits(samples: &mut [u8], channels: usize, usable: usize, payload: &[u8]) {
    let mut pos = 0;
    for byte in payload.iter().copied().chain(std::iter::once(TERMINATOR)) {
        for k in 0..8 {
            let bit = (byte >> k) & 1;
            let slot = (pos / usable) * channels + pos % usable;
            samples[slot] = (samples[slot] & 0xFE) | bit;
            pos += 1;
        }
    }
}

fn read_bits(samples: &[u8], channels: usize, usable: usize) -> Option<Vec<u8>> {
    let total_bits = (samples.len() / channels) * usable;
    let mut recovered = Vec::new();
    let mut accumulator = 0u8;
    for pos in 0..total_bits {
        let slot = (pos / usable) * channels + pos % usable;
        accumulator |= (samples[slot] & 1) << (pos % 8);
        if pos % 8 == 7 {
            if accumulator == TERMINATOR {
                return Some(recovered);
            }
            recovered.push(accumulator);
            accumulator = 0;
        }
    }
    None
}
