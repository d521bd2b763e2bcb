//! Quantization options.

use super::QuantizeMode;

/// Configuration for turning a grayscale frame into packed 1-bit data.
///
/// # Defaults
///
/// - Threshold: none (dithering decides)
/// - Dither: enabled (Floyd-Steinberg)
/// - Invert: disabled
///
/// # Example
///
/// ```
/// use mono_bitmap::{QuantizeMode, QuantizeOptions};
///
/// let options = QuantizeOptions::new().threshold(300).invert(true);
/// assert_eq!(options.mode(), QuantizeMode::Threshold(255));
///
/// let options = QuantizeOptions::new().dither(false);
/// assert_eq!(options.mode(), QuantizeMode::Direct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Manual threshold. Any integer is accepted and clamped to 0..=255
    /// when the mode is resolved.
    pub threshold: Option<i32>,

    /// Use Floyd-Steinberg when no threshold is given.
    ///
    /// Default: `true`
    pub dither: bool,

    /// Complement the packed output.
    ///
    /// Default: `false`
    pub invert: bool,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            threshold: None,
            dither: true,
            invert: false,
        }
    }
}

impl QuantizeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a manual threshold.
    #[inline]
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set or clear the manual threshold.
    #[inline]
    pub fn maybe_threshold(mut self, threshold: Option<i32>) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// Resolve which quantizer these options select.
    pub fn mode(&self) -> QuantizeMode {
        match self.threshold {
            Some(t) => QuantizeMode::Threshold(t.clamp(0, 255) as u8),
            None if self.dither => QuantizeMode::FloydSteinberg,
            None => QuantizeMode::Direct,
        }
    }

}
