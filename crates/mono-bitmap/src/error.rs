//! Error type for bitmap construction and packing.

use std::fmt;

/// Error type for the mono-bitmap pipeline.
///
/// Every variant signals a dimension contract violation between the pixel
/// source and the declared canvas. None of them are recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    /// Width or height is zero
    EmptyImage {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
    },
    /// Pixel buffer length does not match the declared dimensions
    DimensionMismatch {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
        /// Number of samples that were expected
        expected: usize,
        /// Number of samples actually supplied
        actual: usize,
    },
    /// Packed output length does not match `bytes_per_row * height`
    LengthMismatch {
        /// Expected packed length in bytes
        expected: usize,
        /// Actual packed length in bytes
        actual: usize,
    },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            BitmapError::DimensionMismatch {
                width,
                height,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "pixel buffer does not match {}x{} canvas: expected {} samples, got {}",
                    width, height, expected, actual
                )
            }
            BitmapError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "unexpected packed frame size: got {} bytes, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for BitmapError {}
