//! Decoded frames for the assembler.
//!
//! A [`FrameSource`] is a forward-only producer: frames come out once, in
//! display order, already composited onto the full canvas. The GIF
//! implementation decodes lazily, except that it reads two frames up front
//! to reject still images before anything else happens.

use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use gif::{ColorOutput, DecodeOptions, Decoder, DisposalMethod, Repeat};
use mono_bitmap::{BitmapError, GrayImage};

use crate::error::{ConvertError, InputError};

/// Duration used when a frame reports no delay.
pub const DEFAULT_DURATION_MS: u32 = 100;

/// One decoded frame: full-canvas grayscale pixels plus display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub image: GrayImage,
    pub duration_ms: u32,
}

/// Canvas metadata shared by every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    /// 0 means loop forever
    pub loop_count: u32,
}

/// Producer of decoded frames, consumed exactly once in order.
pub trait FrameSource {
    fn canvas(&self) -> Canvas;

    /// Next frame, or `None` once the sequence is exhausted.
    fn next_frame(&mut self) -> Result<Option<Frame>, ConvertError>;
}

/// Iterate the remaining frames of a source.
pub fn frames<'a, S>(source: &'a mut S) -> impl Iterator<Item = Result<Frame, ConvertError>> + 'a
where
    S: FrameSource + ?Sized + 'a,
{
    std::iter::from_fn(move || source.next_frame().transpose())
}

/// GIF delays are in hundredths of a second; zero falls back to 100 ms.
pub fn frame_duration(delay_cs: u16) -> u32 {
    if delay_cs == 0 {
        DEFAULT_DURATION_MS
    } else {
        delay_cs as u32 * 10
    }
}

fn loop_count(repeat: Repeat) -> u32 {
    match repeat {
        Repeat::Infinite => 0,
        Repeat::Finite(n) => n as u32,
    }
}

/// Animated GIF frame source.
pub struct GifFrameSource {
    path: PathBuf,
    decoder: Decoder<BufReader<File>>,
    compositor: Compositor,
    lookahead: VecDeque<Frame>,
    canvas: Canvas,
    decoded: usize,
}

impl GifFrameSource {
    /// Open `path` and check that it holds more than one frame.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(InputError::NotFound(path.to_path_buf()).into());
        }
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut options = DecodeOptions::new();
        options.set_color_output(ColorOutput::RGBA);
        let decoder = options
            .read_info(BufReader::new(file))
            .map_err(|source| InputError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let width = decoder.width() as usize;
        let height = decoder.height() as usize;
        let mut source = Self {
            path: path.to_path_buf(),
            decoder,
            compositor: Compositor::new(width, height),
            lookahead: VecDeque::with_capacity(2),
            canvas: Canvas {
                width,
                height,
                loop_count: 0,
            },
            decoded: 0,
        };

        while source.lookahead.len() < 2 {
            match source.decode_next()? {
                Some(frame) => source.lookahead.push_back(frame),
                None => break,
            }
        }
        if source.lookahead.len() < 2 {
            return Err(InputError::NotAnimated {
                path: path.to_path_buf(),
                frames: source.lookahead.len(),
            }
            .into());
        }

        // The NETSCAPE block precedes the first image, so it is known by now.
        source.canvas.loop_count = loop_count(source.decoder.repeat());

        tracing::debug!(
            path = %path.display(),
            width,
            height,
            loop_count = source.canvas.loop_count,
            "Opened animated GIF"
        );
        Ok(source)
    }

    fn decode_next(&mut self) -> Result<Option<Frame>, ConvertError> {
        let index = self.decoded;
        let frame = self
            .decoder
            .read_next_frame()
            .map_err(|source| InputError::Decode {
                path: self.path.clone(),
                source,
            })?;
        let Some(frame) = frame else {
            return Ok(None);
        };

        let duration_ms = frame_duration(frame.delay);
        let image = self.compositor.compose(frame, index)?;
        self.decoded += 1;

        tracing::trace!(index, duration_ms, "Decoded frame");
        Ok(Some(Frame { image, duration_ms }))
    }
}

impl FrameSource for GifFrameSource {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, ConvertError> {
        if let Some(frame) = self.lookahead.pop_front() {
            return Ok(Some(frame));
        }
        self.decode_next()
    }
}

/// In-memory frame source.
pub struct MemoryFrameSource {
    canvas: Canvas,
    frames: VecDeque<Frame>,
}

impl MemoryFrameSource {
    pub fn new(canvas: Canvas, frames: Vec<Frame>) -> Self {
        Self {
            canvas,
            frames: frames.into(),
        }
    }
}

impl FrameSource for MemoryFrameSource {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, ConvertError> {
        Ok(self.frames.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

enum Disposal {
    Clear(Rect),
    Restore(Vec<u8>),
}

/// Builds full-canvas RGBA images from GIF sub-frames.
///
/// Fully transparent frame pixels leave the canvas untouched. The canvas
/// starts transparent, which reads as black once converted to luma.
struct Compositor {
    rgba: Vec<u8>,
    width: usize,
    height: usize,
    pending: Option<Disposal>,
}

impl Compositor {
    fn new(width: usize, height: usize) -> Self {
        Self {
            rgba: vec![0; width * height * 4],
            width,
            height,
            pending: None,
        }
    }

    fn compose(&mut self, frame: &gif::Frame<'_>, index: usize) -> Result<GrayImage, ConvertError> {
        match self.pending.take() {
            Some(Disposal::Clear(rect)) => self.clear(rect),
            Some(Disposal::Restore(saved)) => self.rgba = saved,
            None => {}
        }

        let rect = Rect {
            left: frame.left as usize,
            top: frame.top as usize,
            width: frame.width as usize,
            height: frame.height as usize,
        };
        let expected = rect.width * rect.height * 4;
        if frame.buffer.len() != expected {
            return Err(InputError::MalformedFrame {
                index,
                source: BitmapError::DimensionMismatch {
                    width: rect.width,
                    height: rect.height,
                    expected,
                    actual: frame.buffer.len(),
                },
            }
            .into());
        }

        let saved = matches!(frame.dispose, DisposalMethod::Previous).then(|| self.rgba.clone());
        self.blit(rect, &frame.buffer);
        self.pending = match frame.dispose {
            DisposalMethod::Background => Some(Disposal::Clear(rect)),
            DisposalMethod::Previous => saved.map(Disposal::Restore),
            _ => None,
        };

        GrayImage::from_rgba(&self.rgba, self.width, self.height)
            .map_err(|source| InputError::MalformedFrame { index, source }.into())
    }

    /// Parts of the frame outside the canvas are clipped.
    fn blit(&mut self, rect: Rect, pixels: &[u8]) {
        for row in 0..rect.height {
            let y = rect.top + row;
            if y >= self.height {
                break;
            }
            for col in 0..rect.width {
                let x = rect.left + col;
                if x >= self.width {
                    break;
                }
                let src = (row * rect.width + col) * 4;
                let px = &pixels[src..src + 4];
                if px[3] == 0 {
                    continue;
                }
                let dst = (y * self.width + x) * 4;
                self.rgba[dst..dst + 4].copy_from_slice(px);
            }
        }
    }

    fn clear(&mut self, rect: Rect) {
        let bottom = (rect.top + rect.height).min(self.height);
        let right = (rect.left + rect.width).min(self.width);
        for y in rect.top.min(bottom)..bottom {
            let start = (y * self.width + rect.left.min(right)) * 4;
            let end = (y * self.width + right) * 4;
            self.rgba[start..end].fill(0);
        }
    }
}
