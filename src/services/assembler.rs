//! Turns a frame sequence into an [`AnimationRecord`].

use std::path::Path;

use mono_bitmap::{bytes_per_frame, MonoEncoder, QuantizeOptions};

use crate::error::{ConfigError, ConvertError, InternalError};
use crate::models::layout::{U16_LIMIT, U32_LIMIT};
use crate::models::{AnimationRecord, PackedFrame};
use crate::services::frame_source::{Canvas, Frame};

/// Symbol used when sanitizing leaves nothing.
pub const DEFAULT_NAME: &str = "animation";

/// Make `raw` usable as a C identifier.
///
/// Characters outside `[0-9A-Za-z_]` become `_`, a leading digit gets an
/// extra `_` in front, and an empty result becomes [`DEFAULT_NAME`].
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.chars().next() {
        None => DEFAULT_NAME.to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{cleaned}"),
        Some(_) => cleaned,
    }
}

/// The explicit name if given, else the source file stem; sanitized.
pub fn derive_name(explicit: Option<&str>, source: &Path) -> String {
    let raw = match explicit {
        Some(name) => name.to_string(),
        None => source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    sanitize_name(&raw)
}

/// Identity of the animation being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationMeta {
    pub name: String,
    pub source_path: String,
    pub canvas: Canvas,
}

/// Quantizes, packs, and lays out frames one after another.
pub struct AnimationAssembler {
    encoder: MonoEncoder,
}

impl AnimationAssembler {
    pub fn new(options: QuantizeOptions) -> Self {
        Self {
            encoder: MonoEncoder::new(options),
        }
    }

    /// Consume `frames` in order and build the record.
    ///
    /// Stops at the first failing frame. Fails with
    /// [`ConfigError::NoFrames`] when the sequence is empty.
    pub fn assemble<I>(&self, meta: AnimationMeta, frames: I) -> Result<AnimationRecord, ConvertError>
    where
        I: IntoIterator<Item = Result<Frame, ConvertError>>,
    {
        let Canvas {
            width,
            height,
            loop_count,
        } = meta.canvas;
        let expected = bytes_per_frame(width, height);

        tracing::debug!(
            name = %meta.name,
            width,
            height,
            bytes_per_frame = expected,
            mode = self.encoder.mode().label(),
            invert = self.encoder.inverts(),
            "Assembling animation"
        );

        let mut packed = Vec::new();
        let mut offset = 0usize;
        for (index, frame) in frames.into_iter().enumerate() {
            let frame = frame?;
            let image = &frame.image;
            if image.width() != width || image.height() != height {
                return Err(InternalError::CanvasMismatch {
                    index,
                    expected_width: width,
                    expected_height: height,
                    actual_width: image.width(),
                    actual_height: image.height(),
                }
                .into());
            }

            let bitmap = self
                .encoder
                .encode(image)
                .map_err(|source| InternalError::Pack { index, source })?;
            if bitmap.len() != expected {
                return Err(InternalError::FrameSizeMismatch {
                    index,
                    expected,
                    actual: bitmap.len(),
                }
                .into());
            }

            tracing::debug!(index, duration_ms = frame.duration_ms, offset, "Packed frame");
            let len = bitmap.len();
            packed.push(PackedFrame {
                duration_ms: frame.duration_ms,
                bitmap,
                offset,
            });
            offset += len;
        }

        if packed.is_empty() {
            return Err(ConfigError::NoFrames.into());
        }

        let record = AnimationRecord::new(
            meta.name,
            width,
            height,
            expected,
            packed,
            loop_count,
            meta.source_path,
        );
        warn_firmware_ranges(&record);
        Ok(record)
    }
}

/// The firmware structs use 16-bit sizes and 32-bit offsets. Values that do
/// not fit are still emitted; the C compiler will truncate them.
fn warn_firmware_ranges(record: &AnimationRecord) {
    let fields = [
        ("width", record.width() as u64),
        ("height", record.height() as u64),
        ("frame_count", record.frame_count() as u64),
        ("bytes_per_frame", record.bytes_per_frame() as u64),
    ];
    for (field, value) in fields {
        if value > U16_LIMIT {
            tracing::warn!(field, value, "Value exceeds uint16_t firmware field");
        }
    }
    for (index, frame) in record.frames().iter().enumerate() {
        if frame.duration_ms as u64 > U16_LIMIT {
            tracing::warn!(index, duration_ms = frame.duration_ms, "Frame duration exceeds uint16_t");
        }
        if frame.offset as u64 > U32_LIMIT {
            tracing::warn!(index, offset = frame.offset, "Frame offset exceeds uint32_t");
        }
    }
}
