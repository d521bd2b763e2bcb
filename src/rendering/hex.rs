//! `0xNN` byte tokens shared by both artifacts.

/// Render a byte as an uppercase two-digit hex literal, e.g. `0xA3`.
#[inline]
pub fn hex_token(byte: u8) -> String {
    format!("0x{byte:02X}")
}

pub fn hex_tokens(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|&b| hex_token(b)).collect()
}

/// Parse a `0xNN` literal back into a byte.
pub fn parse_hex_token(token: &str) -> Option<u8> {
    let digits = token
        .trim()
        .strip_prefix("0x")
        .or_else(|| token.trim().strip_prefix("0X"))?;
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
