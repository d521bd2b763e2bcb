//! Frame encoder: quantize, pack, optionally invert.

use crate::error::BitmapError;
use crate::gray::GrayImage;
use crate::pack::{invert, pack};
use crate::quantize::{Quantize, QuantizeMode, QuantizeOptions};

/// Encodes grayscale frames into packed 1-bit bitmaps.
///
/// The quantizer is resolved once from the options, so every frame of an
/// animation goes through the same path.
///
/// # Example
///
/// ```
/// use mono_bitmap::{GrayImage, MonoEncoder, QuantizeOptions};
///
/// let image = GrayImage::new(vec![255; 10], 10, 1).unwrap();
/// let encoder = MonoEncoder::new(QuantizeOptions::new().threshold(128).invert(true));
///
/// // Padding bits are complemented too.
/// assert_eq!(encoder.encode(&image).unwrap(), vec![0x00, 0x3F]);
/// ```
#[derive(Debug, Clone)]
pub struct MonoEncoder {
    mode: QuantizeMode,
    invert: bool,
}

impl MonoEncoder {
    pub fn new(options: QuantizeOptions) -> Self {
        Self {
            mode: options.mode(),
            invert: options.invert,
        }
    }

    /// The resolved quantizer.
    pub fn mode(&self) -> QuantizeMode {
        self.mode
    }

    pub fn inverts(&self) -> bool {
        self.invert
    }

    /// Quantize and pack one frame.
    ///
    /// Inversion happens after packing, on the whole buffer.
    pub fn encode(&self, image: &GrayImage) -> Result<Vec<u8>, BitmapError> {
        let mono = self.mode.quantize(image);
        let mut packed = pack(&mono)?;
        if self.invert {
            invert(&mut packed);
        }
        Ok(packed)
    }
}

impl Default for MonoEncoder {
    fn default() -> Self {
        Self::new(QuantizeOptions::default())
    }
}
