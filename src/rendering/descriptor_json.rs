//! JSON descriptor artifact.

use serde::Serialize;

use crate::models::AnimationRecord;
use crate::rendering::hex::hex_tokens;

#[derive(Debug, Serialize)]
struct DescriptorDocument<'a> {
    name: &'a str,
    source: &'a str,
    width: usize,
    height: usize,
    bytes_per_frame: usize,
    frame_count: usize,
    loop_count: u32,
    frames: Vec<FrameEntry>,
}

#[derive(Debug, Serialize)]
struct FrameEntry {
    index: usize,
    duration_ms: u32,
    bitmap_offset: usize,
    hex: Vec<String>,
}

/// Render the descriptor as pretty-printed JSON with a trailing newline.
///
/// Key order is fixed by the struct declarations, so output is byte-stable.
pub fn render_descriptor(record: &AnimationRecord) -> Result<String, serde_json::Error> {
    let document = DescriptorDocument {
        name: record.name(),
        source: record.source_path(),
        width: record.width(),
        height: record.height(),
        bytes_per_frame: record.bytes_per_frame(),
        frame_count: record.frame_count(),
        loop_count: record.loop_count(),
        frames: record
            .frames()
            .iter()
            .enumerate()
            .map(|(index, frame)| FrameEntry {
                index,
                duration_ms: frame.duration_ms,
                bitmap_offset: frame.offset,
                hex: hex_tokens(&frame.bitmap),
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}
