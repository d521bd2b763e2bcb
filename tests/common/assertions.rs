//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use gif2anim::rendering::{descriptor_payload, header_payload};

/// Read a UTF-8 artifact, failing the test if it is missing.
pub fn read_artifact(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected artifact at {}: {e}", path.display()))
}

/// Assert neither path exists.
pub fn assert_not_written(paths: &[&Path]) {
    for path in paths {
        assert!(!path.exists(), "Expected no file at {}", path.display());
    }
}

/// Assert the JSON descriptor and the header byte table carry `expected`.
pub fn assert_same_payload(json: &str, header: &str, name: &str, expected: &[u8]) {
    let from_json = descriptor_payload(json).expect("descriptor payload");
    let from_header = header_payload(header, name).expect("header payload");
    assert_eq!(from_json, from_header, "JSON and header bytes differ");
    assert_eq!(from_json, expected);
}

/// Frame table entries `{duration, offset}` in header order.
pub fn frame_entries(header: &str) -> Vec<(u32, u32)> {
    let start = header
        .find("AnimationFrame")
        .expect("frame table present");
    header[start..]
        .lines()
        .skip(1)
        .take_while(|line| line.trim() != "};")
        .map(|line| {
            let inner = line
                .trim()
                .trim_end_matches(',')
                .trim_start_matches('{')
                .trim_end_matches('}');
            let (d, o) = inner.split_once(", ").expect("entry has two values");
            (d.parse().unwrap(), o.parse().unwrap())
        })
        .collect()
}
