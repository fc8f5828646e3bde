//! Errors reported by the codec before it touches a single bit.

use thiserror::Error;

/// Failure modes of the embedding/extraction codec.
///
/// Both variants are raised before any mutation, so a failed call leaves the
/// carrier byte-for-byte identical to its input.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The carrier is not an 8-bit grayscale, RGB, or RGBA image.
    #[error("unsupported carrier format: {0} (expected an 8-bit grayscale, RGB, or RGBA image)")]
    UnsupportedFormat(String),

    /// The framed payload needs more LSB slots than the carrier provides.
    #[error(
        "the carrier is too small for the payload: {required} bits required, {available} available"
    )]
    CapacityExceeded { required: u64, available: u64 },
}
