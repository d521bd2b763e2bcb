//! Recover payload bytes from rendered artifacts.
//!
//! Used to confirm that the descriptor and the static-data header describe
//! the same bytes before either is written.

use serde::Deserialize;

use crate::error::ReadbackError;
use crate::rendering::hex::parse_hex_token;
use crate::rendering::static_header::bitmaps_symbol;

#[derive(Debug, Deserialize)]
struct DescriptorReadback {
    frames: Vec<FrameReadback>,
}

#[derive(Debug, Deserialize)]
struct FrameReadback {
    bitmap_offset: usize,
    hex: Vec<String>,
}

/// Concatenated frame bytes of a descriptor document, checked against the
/// recorded offsets.
pub fn descriptor_payload(json: &str) -> Result<Vec<u8>, ReadbackError> {
    let document: DescriptorReadback = serde_json::from_str(json)?;

    let mut payload = Vec::new();
    for (index, frame) in document.frames.iter().enumerate() {
        if frame.bitmap_offset != payload.len() {
            return Err(ReadbackError::OffsetGap {
                index,
                offset: frame.bitmap_offset,
                expected: payload.len(),
            });
        }
        for token in &frame.hex {
            let byte = parse_hex_token(token).ok_or_else(|| ReadbackError::InvalidToken {
                index,
                token: token.clone(),
            })?;
            payload.push(byte);
        }
    }
    Ok(payload)
}

/// Byte table of a static-data header generated for `name`.
pub fn header_payload(header: &str, name: &str) -> Result<Vec<u8>, ReadbackError> {
    let opener = format!("{}[]", bitmaps_symbol(name));
    let start = header
        .find(&opener)
        .ok_or_else(|| ReadbackError::TableNotFound(opener.clone()))?;
    let body_start = header[start..]
        .find('{')
        .map(|i| start + i + 1)
        .ok_or_else(|| ReadbackError::Unterminated(opener.clone()))?;
    let body_end = header[body_start..]
        .find("};")
        .map(|i| body_start + i)
        .ok_or_else(|| ReadbackError::Unterminated(opener.clone()))?;

    header[body_start..body_end]
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| parse_hex_token(t).ok_or_else(|| ReadbackError::InvalidLiteral(t.to_string())))
        .collect()
}
