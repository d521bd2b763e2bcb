//! Test fixtures: synthesized GIFs and their expected packed bytes.

use gif::{Encoder, Frame, Repeat};
use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

/// Two-color global palette: index 0 black, index 1 white.
pub const PALETTE: &[u8] = &[0, 0, 0, 255, 255, 255];

/// One frame of palette indices plus its delay in hundredths of a second.
pub struct GifFrame {
    pub indices: Vec<u8>,
    pub delay_cs: u16,
}

/// Palette indices for a `width`×`height` frame, white where `on` holds.
pub fn pattern(width: u16, height: u16, on: impl Fn(usize, usize) -> bool) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| u8::from(on(x, y)))
        .collect()
}

/// Encode `frames` as a GIF at `path` with the black/white palette.
pub fn write_gif(path: &Path, width: u16, height: u16, frames: &[GifFrame], repeat: Repeat) {
    write_gif_with_palette(path, width, height, PALETTE, frames, repeat);
}

pub fn write_gif_with_palette(
    path: &Path,
    width: u16,
    height: u16,
    palette: &[u8],
    frames: &[GifFrame],
    repeat: Repeat,
) {
    let mut file = File::create(path).unwrap();
    let mut encoder = Encoder::new(&mut file, width, height, palette).unwrap();
    encoder.set_repeat(repeat).unwrap();
    for f in frames {
        let frame = Frame {
            width,
            height,
            delay: f.delay_cs,
            buffer: Cow::Borrowed(&f.indices),
            ..Frame::default()
        };
        encoder.write_frame(&frame).unwrap();
    }
}

/// The 16×8 "eye" animation: three frames of 100, 150, 100 ms.
pub mod eye {
    use super::*;

    pub const WIDTH: u16 = 16;
    pub const HEIGHT: u16 = 8;

    pub fn frames() -> Vec<GifFrame> {
        vec![
            GifFrame {
                indices: pattern(WIDTH, HEIGHT, |x, _| x < 8),
                delay_cs: 10,
            },
            GifFrame {
                indices: pattern(WIDTH, HEIGHT, |x, _| x % 2 == 0),
                delay_cs: 15,
            },
            GifFrame {
                indices: pattern(WIDTH, HEIGHT, |_, y| y < 4),
                delay_cs: 10,
            },
        ]
    }

    pub fn write(path: &Path) {
        write_gif(path, WIDTH, HEIGHT, &frames(), Repeat::Infinite);
    }

    /// Packed bytes of every frame with threshold 128 and no inversion.
    pub fn expected_bitmaps() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend([0xFF, 0x00].repeat(8));
        bytes.extend([0xAA, 0xAA].repeat(8));
        bytes.extend([0xFF, 0xFF].repeat(4));
        bytes.extend([0x00, 0x00].repeat(4));
        bytes
    }
}

/// A 10×2 animation whose rows end in 6 padding bits.
pub mod narrow {
    use super::*;

    pub const WIDTH: u16 = 10;
    pub const HEIGHT: u16 = 2;

    pub fn write(path: &Path) {
        let frames = vec![
            GifFrame {
                indices: pattern(WIDTH, HEIGHT, |_, _| true),
                delay_cs: 5,
            },
            GifFrame {
                indices: pattern(WIDTH, HEIGHT, |x, y| y == 0 && x == 9),
                delay_cs: 0,
            },
        ];
        write_gif(path, WIDTH, HEIGHT, &frames, Repeat::Finite(3));
    }
}

/// A flat dark-gray 16×8 animation: Floyd-Steinberg sets about a quarter of
/// the pixels, a plain 50% cut sets none.
pub mod dark_gray {
    use super::*;

    /// Black, white, and gray 64.
    pub const PALETTE: &[u8] = &[0, 0, 0, 255, 255, 255, 64, 64, 64, 64, 64, 64];

    pub fn write(path: &Path) {
        let frame = || GifFrame {
            indices: vec![2; 16 * 8],
            delay_cs: 10,
        };
        write_gif_with_palette(path, 16, 8, PALETTE, &[frame(), frame()], Repeat::Infinite);
    }
}

/// A GIF holding a single frame.
pub fn write_still(path: &Path) {
    let frame = GifFrame {
        indices: pattern(8, 8, |x, y| x == y),
        delay_cs: 10,
    };
    write_gif(path, 8, 8, &[frame], Repeat::Infinite);
}
