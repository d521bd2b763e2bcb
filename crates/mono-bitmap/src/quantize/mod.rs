//! Grayscale to 1-bit quantization.
//!
//! # Algorithms
//!
//! - **Threshold**: a pixel is on when its luma is at least the threshold.
//!   Pure per-pixel function, no error diffusion.
//! - **Floyd-Steinberg**: classic error diffusion, 100% propagation.
//! - **Direct**: fixed mid-point threshold (128), no diffusion.
//!
//! # Architecture
//!
//! All algorithms implement the [`Quantize`] trait. [`QuantizeOptions`]
//! selects one of them through [`QuantizeOptions::mode()`] using the rule:
//! an explicit threshold wins, otherwise `dither` chooses between
//! Floyd-Steinberg and direct reduction.

mod floyd_steinberg;
mod kernel;
mod options;
mod threshold;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use options::QuantizeOptions;
pub use threshold::{Direct, Threshold};

use crate::gray::GrayImage;
use crate::mono::MonoImage;

/// Decision point shared by direct reduction and error diffusion.
pub const MIDPOINT: u8 = 128;

/// Trait for grayscale to monochrome quantizers.
///
/// Implementations must return an image with the same dimensions as the
/// input and must be deterministic: identical input yields identical output.
pub trait Quantize {
    fn quantize(&self, image: &GrayImage) -> MonoImage;
}

/// The quantizer selected by a [`QuantizeOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeMode {
    /// Manual threshold, already clamped to 0..=255.
    Threshold(u8),
    /// Floyd-Steinberg error diffusion.
    FloydSteinberg,
    /// Mid-point threshold without diffusion.
    Direct,
}

impl QuantizeMode {
    /// Short lowercase label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            QuantizeMode::Threshold(_) => "threshold",
            QuantizeMode::FloydSteinberg => "floyd-steinberg",
            QuantizeMode::Direct => "direct",
        }
    }
}

impl Quantize for QuantizeMode {
    fn quantize(&self, image: &GrayImage) -> MonoImage {
        match *self {
            QuantizeMode::Threshold(t) => Threshold(t).quantize(image),
            QuantizeMode::FloydSteinberg => FloydSteinberg.quantize(image),
            QuantizeMode::Direct => Direct.quantize(image),
        }
    }
}
