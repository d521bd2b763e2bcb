//! Monochrome output of the quantizers.
//!
//! [`MonoImage`] stores one on/off decision per pixel in row-major order.
//! It is the only input [`pack()`](crate::pack::pack) accepts.

use crate::error::BitmapError;

/// A row-major 1-bit pixel grid, one `bool` per pixel (`true` = on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoImage {
    pixels: Vec<bool>,
    width: usize,
    height: usize,
}

impl MonoImage {
    /// Create a new `MonoImage` from per-pixel decisions.
    ///
    /// Fails when the decision count is not `width * height` or either
    /// dimension is zero.
    pub fn new(pixels: Vec<bool>, width: usize, height: usize) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::EmptyImage { width, height });
        }
        if pixels.len() != width * height {
            return Err(BitmapError::DimensionMismatch {
                width,
                height,
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Quantizer-internal constructor; the caller guarantees the length.
    pub(crate) fn from_decisions(pixels: Vec<bool>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "decision count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate over rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Number of "on" pixels.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }
}
