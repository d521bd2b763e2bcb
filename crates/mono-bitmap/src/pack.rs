//! Row-padded 1-bit packing.
//!
//! Rows are packed independently, top row first. Each row starts on a byte
//! boundary and the most significant bit of a byte is its leftmost pixel:
//!
//! ```text
//! width = 10
//!
//! row 0: p0 p1 p2 p3 p4 p5 p6 p7 | p8 p9 -- -- -- -- -- --
//! row 1: p0 p1 p2 p3 p4 p5 p6 p7 | p8 p9 -- -- -- -- -- --
//!        ^ bit 7                    ^ bit 7  ^ padding (zero)
//! ```

use crate::error::BitmapError;
use crate::mono::MonoImage;

/// Packed row stride in bytes: `ceil(width / 8)`.
#[inline]
pub fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

/// Packed frame size in bytes: `ceil(width / 8) * height`.
#[inline]
pub fn bytes_per_frame(width: usize, height: usize) -> usize {
    bytes_per_row(width) * height
}

/// Pack a monochrome image into bytes.
///
/// Padding bits are zero. The output length is checked against
/// [`bytes_per_frame()`] and a mismatch is reported rather than corrected.
pub fn pack(image: &MonoImage) -> Result<Vec<u8>, BitmapError> {
    let expected = bytes_per_frame(image.width(), image.height());
    let mut out = Vec::with_capacity(expected);

    for row in image.rows() {
        for span in row.chunks(8) {
            let mut byte = 0u8;
            for (bit, &on) in span.iter().enumerate() {
                if on {
                    byte |= 0x80 >> bit;
                }
            }
            out.push(byte);
        }
    }

    if out.len() != expected {
        return Err(BitmapError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }
    Ok(out)
}

/// Complement every bit of a packed buffer in place.
pub fn invert(packed: &mut [u8]) {
    for byte in packed.iter_mut() {
        *byte = !*byte;
    }
}
