//! Floyd-Steinberg error diffusion to 1 bit.
//!
//! Rows are scanned left to right, top to bottom. Each pixel's luma plus the
//! accumulated error is compared with the mid-point; the difference between
//! that value and the chosen level (0 or 255) is spread with the
//! [`FLOYD_STEINBERG`] kernel. Shares are accumulated in units of
//! `1/divisor` and divided once when the pixel is read, so no error is lost
//! to per-share rounding.

use super::kernel::{Kernel, FLOYD_STEINBERG};
use super::{Quantize, MIDPOINT};
use crate::gray::GrayImage;
use crate::mono::MonoImage;

/// Floyd-Steinberg error diffusion dithering.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Deterministic: the same image always dithers to the same bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloydSteinberg;

impl Quantize for FloydSteinberg {
    fn quantize(&self, image: &GrayImage) -> MonoImage {
        diffuse_with_kernel(image, &FLOYD_STEINBERG)
    }
}

/// Sliding window of error rows, `max_dy + 1` deep.
///
/// Entries hold `error * weight` sums, not yet divided by the kernel divisor.
#[derive(Debug)]
struct ErrorRows {
    rows: Vec<Vec<i32>>,
    width: usize,
}

impl ErrorRows {
    fn new(width: usize, depth: usize) -> Self {
        Self {
            rows: (0..depth).map(|_| vec![0; width]).collect(),
            width,
        }
    }

    #[inline]
    fn get(&self, x: usize) -> i32 {
        self.rows[0][x]
    }

    /// Out-of-bounds targets are dropped.
    #[inline]
    fn add(&mut self, x: isize, dy: usize, error: i32) {
        if x >= 0 && (x as usize) < self.width && dy < self.rows.len() {
            self.rows[dy][x as usize] += error;
        }
    }

    fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0);
        }
    }
}

fn diffuse_with_kernel(image: &GrayImage, kernel: &Kernel) -> MonoImage {
    let width = image.width();
    let height = image.height();
    let mut errors = ErrorRows::new(width, kernel.max_dy + 1);
    let mut pixels = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            // Clamping keeps error from snowballing across long flat runs.
            let carried = errors.get(x) / kernel.divisor;
            let value = (image.get(x, y) as i32 + carried).clamp(0, 255);
            let on = value >= MIDPOINT as i32;
            let error = value - if on { 255 } else { 0 };

            for &(dx, dy, weight) in kernel.entries {
                errors.add(x as isize + dx as isize, dy as usize, error * weight);
            }
            pixels.push(on);
        }
        errors.advance_row();
    }

    MonoImage::from_decisions(pixels, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(value: u8, width: usize, height: usize) -> GrayImage {
        GrayImage::new(vec![value; width * height], width, height).unwrap()
    }

    #[test]
    fn test_pure_black_stays_off() {
        let result = FloydSteinberg.quantize(&flat(0, 8, 8));
        assert_eq!(result.count_on(), 0);
    }

    #[test]
    fn test_pure_white_stays_on() {
        let result = FloydSteinberg.quantize(&flat(255, 8, 8));
        assert_eq!(result.count_on(), 64);
    }

    #[test]
    fn test_mid_gray_mixes() {
        let result = FloydSteinberg.quantize(&flat(128, 16, 16));
        let ratio = result.count_on() as f32 / 256.0;
        assert!(
            (ratio - 0.5).abs() < 0.1,
            "Expected ~0.5 on ratio, got {}",
            ratio
        );
    }

    #[test]
    fn test_brightness_preserved() {
        // 100% propagation: the on ratio tracks the input level.
        let result = FloydSteinberg.quantize(&flat(64, 32, 32));
        let ratio = result.count_on() as f32 / 1024.0;
        assert!(
            (ratio - 0.25).abs() < 0.08,
            "Expected ~0.25 on ratio, got {}",
            ratio
        );
    }

    fn on_count(value: u8) -> usize {
        FloydSteinberg.quantize(&flat(value, 64, 64)).count_on()
    }

    #[test]
    fn test_near_black_keeps_sparse_dots() {
        // Ideal: 64 and 129 of 4096 pixels.
        let dark = on_count(4);
        assert!((30..=64).contains(&dark), "gray 4: {dark} pixels on");
        let dim = on_count(8);
        assert!((95..=129).contains(&dim), "gray 8: {dim} pixels on");
    }

    #[test]
    fn test_near_white_keeps_sparse_holes() {
        // Ideal: 80 of 4096 pixels off.
        let off = 4096 - on_count(250);
        assert!((45..=80).contains(&off), "gray 250: {off} pixels off");
    }

    #[test]
    fn test_deterministic() {
        let image = GrayImage::new((0..100).map(|i| (i * 255 / 100) as u8).collect(), 10, 10)
            .unwrap();
        assert_eq!(FloydSteinberg.quantize(&image), FloydSteinberg.quantize(&image));
    }

    #[test]
    fn test_single_column() {
        let result = FloydSteinberg.quantize(&flat(200, 1, 5));
        assert_eq!((result.width(), result.height()), (1, 5));
    }

    #[test]
    fn test_error_rows_drop_out_of_bounds() {
        let mut rows = ErrorRows::new(3, 2);
        rows.add(-1, 0, 50);
        rows.add(3, 1, 50);
        rows.add(1, 2, 50);
        rows.add(2, 1, 7);
        assert_eq!(rows.get(0), 0);
        rows.advance_row();
        assert_eq!(rows.get(2), 7);
        rows.advance_row();
        assert_eq!(rows.get(2), 0);
    }
}
