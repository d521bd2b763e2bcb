//! Grayscale input image.
//!
//! [`GrayImage`] is the single input representation of the quantizers.
//! Color sources are reduced to luma with [`luma()`] before quantization.

use crate::error::BitmapError;

/// Convert an sRGB triple to 8-bit luma.
///
/// Uses the ITU-R 601-2 weights (0.299, 0.587, 0.114) in 16.16 fixed point
/// with rounding, so pure white stays 255 and pure black stays 0.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// A row-major 8-bit grayscale pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    luma: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayImage {
    /// Wrap a luma buffer of `width * height` samples.
    pub fn new(luma: Vec<u8>, width: usize, height: usize) -> Result<Self, BitmapError> {
        check_dimensions(width, height, 1, luma.len())?;
        Ok(Self {
            luma,
            width,
            height,
        })
    }

    /// Convert an RGBA buffer (4 bytes per pixel) to grayscale.
    ///
    /// Alpha is applied against black: a fully transparent pixel becomes 0.
    pub fn from_rgba(rgba: &[u8], width: usize, height: usize) -> Result<Self, BitmapError> {
        check_dimensions(width, height, 4, rgba.len())?;
        let luma = rgba
            .chunks_exact(4)
            .map(|px| {
                let y = luma(px[0], px[1], px[2]) as u32;
                ((y * px[3] as u32 + 127) / 255) as u8
            })
            .collect();
        Ok(Self {
            luma,
            width,
            height,
        })
    }

    /// Returns the luma samples in row-major order.
    #[inline]
    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Luma at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.luma[y * self.width + x]
    }
}

fn check_dimensions(
    width: usize,
    height: usize,
    channels: usize,
    len: usize,
) -> Result<(), BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::EmptyImage { width, height });
    }
    let expected = width * height * channels;
    if len != expected {
        return Err(BitmapError::DimensionMismatch {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}
