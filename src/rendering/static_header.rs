//! C/C++ static-data artifact.
//!
//! The generated header holds, in order: include guard, the support header
//! include, a `PROGMEM` fallback, the namespace openers, the byte table,
//! the frame table, the descriptor instance, and the namespace closers.

use crate::models::layout::{FORMAT_HEADER, STORAGE_QUALIFIER};
use crate::models::{AnimationRecord, ANIMATION_DESCRIPTOR, ANIMATION_FRAME};
use crate::rendering::hex::hex_token;

const INDENT: &str = "    ";

/// Rendering options for the static-data artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// `::`-separated namespace path; empty segments are ignored
    pub namespace: String,
    /// Hex values per line in the byte table
    pub bytes_per_line: usize,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            namespace: "animations::generated".to_string(),
            bytes_per_line: 12,
        }
    }
}

/// Split a namespace path, dropping empty segments.
pub fn namespace_segments(namespace: &str) -> Vec<&str> {
    namespace
        .split("::")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Symbol of the byte table for an animation name.
pub fn bitmaps_symbol(name: &str) -> String {
    format!("{name}_bitmaps")
}

/// Symbol of the frame table for an animation name.
pub fn frames_symbol(name: &str) -> String {
    format!("{name}_frames")
}

/// Symbol of the descriptor instance for an animation name.
pub fn descriptor_symbol(name: &str) -> String {
    format!("{name}_animation")
}

/// Render the static-data header for `record`.
pub fn render_static_data(record: &AnimationRecord, options: &HeaderOptions) -> String {
    let segments = namespace_segments(&options.namespace);
    let name = record.name();
    let bitmaps = bitmaps_symbol(name);
    let frames = frames_symbol(name);

    let mut lines: Vec<String> = vec![
        "#pragma once".into(),
        String::new(),
        "#include <stdint.h>".into(),
        format!("#include \"{FORMAT_HEADER}\""),
        String::new(),
    ];
    lines.extend(progmem_fallback());
    lines.push(String::new());
    lines.push("// Auto-generated by gif2anim".into());

    for part in &segments {
        lines.push(format!("namespace {part} {{"));
    }
    lines.push(String::new());

    lines.push(format!(
        "static const uint8_t {bitmaps}[] {STORAGE_QUALIFIER} = {{"
    ));
    lines.extend(byte_table_lines(&record.bitmap_buffer(), options.bytes_per_line));
    lines.push("};".into());
    lines.push(String::new());

    lines.push(format!(
        "static const {} {frames}[] {STORAGE_QUALIFIER} = {{",
        ANIMATION_FRAME.name
    ));
    let entries: Vec<String> = record
        .frames()
        .iter()
        .map(|f| format!("{INDENT}{{{}, {}}}", f.duration_ms, f.offset))
        .collect();
    lines.push(entries.join(",\n"));
    lines.push("};".into());
    lines.push(String::new());

    lines.push(format!(
        "static const {} {} {STORAGE_QUALIFIER} = {{",
        ANIMATION_DESCRIPTOR.name,
        descriptor_symbol(name)
    ));
    let values = [
        record.width().to_string(),
        record.height().to_string(),
        record.frame_count().to_string(),
        record.bytes_per_frame().to_string(),
        frames,
        bitmaps,
    ];
    debug_assert_eq!(values.len(), ANIMATION_DESCRIPTOR.fields.len());
    let last = values.len() - 1;
    for (i, (value, field)) in values.iter().zip(ANIMATION_DESCRIPTOR.fields).enumerate() {
        let comma = if i == last { "" } else { "," };
        lines.push(format!("{INDENT}{value}{comma}  // {}", field.name));
    }
    lines.push("};".into());
    lines.push(String::new());

    for part in segments.iter().rev() {
        lines.push(format!("}}  // namespace {part}"));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Render the support header declaring the firmware structs.
pub fn render_format_header() -> String {
    let mut lines: Vec<String> = vec![
        "#pragma once".into(),
        String::new(),
        "#include <stdint.h>".into(),
        String::new(),
    ];
    lines.extend(progmem_fallback());

    for layout in [ANIMATION_FRAME, ANIMATION_DESCRIPTOR] {
        lines.push(String::new());
        lines.push(format!("struct {} {{", layout.name));
        for field in layout.fields {
            lines.push(format!(
                "{INDENT}{} {};  // {}",
                field.c_type, field.name, field.comment
            ));
        }
        lines.push("};".into());
    }
    lines.push(String::new());

    lines.join("\n")
}

fn progmem_fallback() -> [String; 3] {
    [
        format!("#ifndef {STORAGE_QUALIFIER}"),
        format!("#define {STORAGE_QUALIFIER}"),
        "#endif".into(),
    ]
}

fn byte_table_lines(bytes: &[u8], per_line: usize) -> Vec<String> {
    let per_line = per_line.max(1);
    let chunks: Vec<String> = bytes
        .chunks(per_line)
        .map(|chunk| {
            let tokens: Vec<String> = chunk.iter().map(|&b| hex_token(b)).collect();
            format!("{INDENT}{}", tokens.join(", "))
        })
        .collect();
    vec![chunks.join(",\n")]
}
