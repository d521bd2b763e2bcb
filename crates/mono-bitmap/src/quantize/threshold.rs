//! Per-pixel threshold quantizers.

use super::{Quantize, MIDPOINT};
use crate::gray::GrayImage;
use crate::mono::MonoImage;

/// Manual threshold: on when `luma >= threshold`.
///
/// Threshold 0 turns every pixel on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(pub u8);

impl Quantize for Threshold {
    fn quantize(&self, image: &GrayImage) -> MonoImage {
        let pixels = image.luma().iter().map(|&l| l >= self.0).collect();
        MonoImage::from_decisions(pixels, image.width(), image.height())
    }
}

/// Direct 1-bit reduction without error diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direct;

impl Quantize for Direct {
    fn quantize(&self, image: &GrayImage) -> MonoImage {
        Threshold(MIDPOINT).quantize(image)
    }
}
