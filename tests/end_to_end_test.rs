//! End-to-end conversion tests: GIF on disk to both artifacts on disk.

mod common;

use gif2anim::error::{ConfigError, ConvertError, InputError};
use gif2anim::services::ConvertPipeline;
use mono_bitmap::QuantizeOptions;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

use common::{fixtures, TestWorkspace};

#[test]
fn test_eye_animation_with_threshold() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);

    let report = ConvertPipeline::new(ws.threshold_request(&source))
        .run()
        .unwrap();

    assert_eq!(report.name, "eye");
    assert_eq!(report.frame_count, 3);
    assert_eq!(report.bytes_per_frame, 16);
    assert_eq!(report.total_bytes, 48);
    assert_eq!(report.json_path, ws.path("animations/eye.json"));
    assert_eq!(report.header_path, ws.path("include/animations/eye.h"));
    assert_eq!(report.format_header_path, None);

    let json = common::read_artifact(&report.json_path);
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["name"], "eye");
    assert_eq!(doc["width"], 16);
    assert_eq!(doc["height"], 8);
    assert_eq!(doc["bytes_per_frame"], 16);
    assert_eq!(doc["frame_count"], 3);
    assert_eq!(doc["loop_count"], 0);
    let offsets: Vec<u64> = doc["frames"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["bitmap_offset"].as_u64().unwrap())
        .collect();
    assert_eq!(offsets, vec![0, 16, 32]);
    assert_eq!(doc["frames"][1]["hex"][0], "0xAA");

    let header = common::read_artifact(&report.header_path);
    assert_eq!(
        common::frame_entries(&header),
        vec![(100, 0), (150, 16), (100, 32)]
    );
    assert!(header.contains("namespace animations {\nnamespace generated {\n"));
    assert!(header.contains("static const AnimationDescriptor eye_animation PROGMEM = {"));
    assert!(header.ends_with("}  // namespace generated\n}  // namespace animations\n"));

    common::assert_same_payload(&json, &header, "eye", &fixtures::eye::expected_bitmaps());
}

#[test]
fn test_single_frame_source_rejected() {
    let ws = TestWorkspace::new();
    let source = ws.path("still.gif");
    fixtures::write_still(&source);

    let err = ConvertPipeline::new(ws.request(&source)).run().unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Input(InputError::NotAnimated { frames: 1, .. })
    ));
    assert_eq!(err.exit_code(), 2);
    common::assert_not_written(&[
        &ws.path("animations/still.json"),
        &ws.path("include/animations/still.h"),
    ]);
}

#[test]
fn test_missing_source() {
    let ws = TestWorkspace::new();
    let err = ConvertPipeline::new(ws.request(&ws.path("nope.gif")))
        .run()
        .unwrap_err();

    assert!(matches!(err, ConvertError::Input(InputError::NotFound(_))));
    assert!(err.to_string().contains("nope.gif"));
}

#[test]
fn test_garbage_source_is_decode_error() {
    let ws = TestWorkspace::new();
    let source = ws.write("fake.gif", "this is not a gif");

    let err = ConvertPipeline::new(ws.request(&source)).run().unwrap_err();

    assert!(matches!(err, ConvertError::Input(InputError::Decode { .. })));
}

#[test]
fn test_invert_complements_every_byte() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);

    let plain = ConvertPipeline::new(ws.threshold_request(&source))
        .build_record()
        .unwrap();
    let mut request = ws.threshold_request(&source);
    request.quantize = request.quantize.invert(true);
    let inverted = ConvertPipeline::new(request).build_record().unwrap();

    let complement: Vec<u8> = plain.bitmap_buffer().iter().map(|b| !b).collect();
    assert_eq!(inverted.bitmap_buffer(), complement);
}

#[test]
fn test_narrow_rows_are_padded() {
    let ws = TestWorkspace::new();
    let source = ws.path("narrow.gif");
    fixtures::narrow::write(&source);

    let report = ConvertPipeline::new(ws.threshold_request(&source))
        .run()
        .unwrap();
    assert_eq!(report.bytes_per_frame, 4);

    let json = common::read_artifact(&report.json_path);
    let header = common::read_artifact(&report.header_path);
    common::assert_same_payload(
        &json,
        &header,
        "narrow",
        &[0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x40, 0x00, 0x00],
    );

    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["loop_count"], 3);
    assert_eq!(doc["frames"][0]["duration_ms"], 50);
    assert_eq!(doc["frames"][1]["duration_ms"], 100);
}

#[test]
fn test_inverted_padding_bits_are_set() {
    let ws = TestWorkspace::new();
    let source = ws.path("narrow.gif");
    fixtures::narrow::write(&source);

    let mut request = ws.threshold_request(&source);
    request.quantize = request.quantize.invert(true);
    let record = ConvertPipeline::new(request).build_record().unwrap();

    assert_eq!(&record.bitmap_buffer()[..4], &[0x00, 0x3F, 0x00, 0x3F]);
}

#[test]
fn test_output_is_reproducible() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);

    // Default settings: Floyd-Steinberg
    let pipeline = ConvertPipeline::new(ws.request(&source));
    let first = pipeline.run().unwrap();
    let json = common::read_artifact(&first.json_path);
    let header = common::read_artifact(&first.header_path);

    let second = pipeline.run().unwrap();
    assert_eq!(common::read_artifact(&second.json_path), json);
    assert_eq!(common::read_artifact(&second.header_path), header);
}

#[test]
fn test_explicit_name_namespace_and_paths() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);

    let mut request = ws.threshold_request(&source);
    request.name = Some("left-eye".into());
    request.json_out = Some(ws.path("out/json/eye.json"));
    request.header_out = Some(ws.path("out/inc/eye.h"));
    request.format_header_out = Some(ws.path("out/inc/animation_format.h"));
    request.header.namespace = "robot::::face".into();

    let report = ConvertPipeline::new(request).run().unwrap();
    assert_eq!(report.name, "left_eye");

    let header = common::read_artifact(&ws.path("out/inc/eye.h"));
    assert!(header.contains("namespace robot {\nnamespace face {\n"));
    assert!(header.contains("static const uint8_t left_eye_bitmaps[] PROGMEM = {"));

    let format = common::read_artifact(&ws.path("out/inc/animation_format.h"));
    assert!(format.contains("struct AnimationFrame {"));
    assert!(format.contains("struct AnimationDescriptor {"));
    assert_eq!(
        report.format_header_path,
        Some(ws.path("out/inc/animation_format.h"))
    );
}

#[test]
fn test_empty_namespace_emits_file_scope() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);

    let mut request = ws.threshold_request(&source);
    request.header.namespace = String::new();
    let report = ConvertPipeline::new(request).run().unwrap();

    let header = common::read_artifact(&report.header_path);
    assert!(!header.contains("namespace"));
    assert!(header.ends_with("};\n\n"));
}

#[test]
fn test_directory_output_path_rejected() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);
    std::fs::create_dir_all(ws.path("taken")).unwrap();

    let mut request = ws.threshold_request(&source);
    request.json_out = Some(ws.path("taken"));
    let err = ConvertPipeline::new(request).run().unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Config(ConfigError::InvalidOutputPath { .. })
    ));
    assert_eq!(err.exit_code(), 3);
    common::assert_not_written(&[&ws.path("include/animations/eye.h")]);
}

#[test]
fn test_direct_mode_matches_threshold_128() {
    let ws = TestWorkspace::new();
    let source = ws.path("eye.gif");
    fixtures::eye::write(&source);

    let mut request = ws.request(&source);
    request.quantize = QuantizeOptions::new().dither(false);
    let record = ConvertPipeline::new(request).build_record().unwrap();

    assert_eq!(record.bitmap_buffer(), fixtures::eye::expected_bitmaps());
    assert_eq!(
        PathBuf::from(record.source_path()),
        ws.path("eye.gif")
    );
}
