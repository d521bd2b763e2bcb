//! The in-memory animation record produced by the assembler.

/// One frame's packed bitmap and its place in the shared bitmap buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedFrame {
    /// Display duration in milliseconds
    pub duration_ms: u32,
    /// Packed 1-bit rows, `bytes_per_frame` long
    pub bitmap: Vec<u8>,
    /// Byte offset of `bitmap` in the concatenated buffer
    pub offset: usize,
}

/// A fully converted animation.
///
/// Built once by [`AnimationAssembler`](crate::services::AnimationAssembler)
/// and read by the emitters. Invariants established at construction:
///
/// - at least one frame
/// - every bitmap is `bytes_per_frame` long
/// - `frames[i].offset == i * bytes_per_frame`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationRecord {
    name: String,
    width: usize,
    height: usize,
    bytes_per_frame: usize,
    frames: Vec<PackedFrame>,
    loop_count: u32,
    source_path: String,
}

impl AnimationRecord {
    pub(crate) fn new(
        name: String,
        width: usize,
        height: usize,
        bytes_per_frame: usize,
        frames: Vec<PackedFrame>,
        loop_count: u32,
        source_path: String,
    ) -> Self {
        Self {
            name,
            width,
            height,
            bytes_per_frame,
            frames,
            loop_count,
            source_path,
        }
    }

    /// Identifier-safe symbol prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_frame(&self) -> usize {
        self.bytes_per_frame
    }

    pub fn frames(&self) -> &[PackedFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// 0 means loop forever
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    /// Where the frames came from; diagnostics only
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Size of the concatenated bitmap buffer in bytes.
    pub fn total_bytes(&self) -> usize {
        self.frames.iter().map(|f| f.bitmap.len()).sum()
    }

    /// All frame bitmaps concatenated in frame order.
    ///
    /// This is the buffer the frame offsets index into.
    pub fn bitmap_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.total_bytes());
        for frame in &self.frames {
            buffer.extend_from_slice(&frame.bitmap);
        }
        buffer
    }
}
