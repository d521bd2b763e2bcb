//! mono-bitmap: 1-bit quantization and packing for embedded displays
//!
//! This library turns grayscale pixel grids into the packed 1-bit bitmaps
//! that small monochrome panels (SSD1306 and friends) consume directly.
//!
//! # Quick Start
//!
//! The [`MonoEncoder`] is the primary entry point:
//!
//! ```
//! use mono_bitmap::{GrayImage, MonoEncoder, QuantizeOptions};
//!
//! let image = GrayImage::new(vec![0, 255, 255, 0], 2, 2).unwrap();
//! let encoder = MonoEncoder::new(QuantizeOptions::new().threshold(128));
//! let packed = encoder.encode(&image).unwrap();
//!
//! assert_eq!(packed, vec![0b0100_0000, 0b1000_0000]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA / luma input
//!     |
//!     v
//! GrayImage              (ITU-R 601-2 luma, fixed point)
//!     |
//!     v
//! Quantize               (threshold | Floyd-Steinberg | direct)
//!     |
//!     v
//! MonoImage              (one bool per pixel, row-major)
//!     |
//!     v
//! pack()                 (row-major, MSB = leftmost, rows padded to bytes)
//!     |
//!     v
//! [invert()]             (optional complement of the packed buffer)
//! ```
//!
//! # Packed Layout
//!
//! Every row starts on a byte boundary. A row of `width` pixels occupies
//! `ceil(width / 8)` bytes, so a frame occupies `ceil(width / 8) * height`
//! bytes. Within a byte the most significant bit is the leftmost pixel.
//! Trailing bits of a row are padding and never carry pixels of the next
//! row.
//!
//! # Polarity
//!
//! A set bit means "on", which for the unmodified pipeline is a bright
//! pixel. Inversion complements the whole packed buffer, padding included,
//! after packing. For threshold and direct quantization this is identical to
//! inverting each pixel decision. For Floyd-Steinberg the diffusion always
//! sees the un-inverted image, so only the final bits flip.

pub mod encoder;
pub mod error;
pub mod gray;
pub mod mono;
pub mod pack;
pub mod quantize;


pub use encoder::MonoEncoder;
pub use error::BitmapError;
pub use gray::{luma, GrayImage};
pub use mono::MonoImage;
pub use pack::{bytes_per_frame, bytes_per_row, invert, pack};
pub use quantize::{Direct, FloydSteinberg, Quantize, QuantizeMode, QuantizeOptions, Threshold};
