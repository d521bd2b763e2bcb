//! Temporary directory holding a source GIF and the generated artifacts.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use gif2anim::models::ConvertConfig;
use gif2anim::services::ConvertRequest;
use mono_bitmap::QuantizeOptions;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Request with default settings, writing under this workspace.
    pub fn request(&self, source: &Path) -> ConvertRequest {
        let config = ConvertConfig {
            json_dir: self.path("animations"),
            header_dir: self.path("include/animations"),
            ..ConvertConfig::default()
        };
        ConvertRequest::from_config(source, &config)
    }

    /// Request with a fixed threshold of 128 and no dithering.
    pub fn threshold_request(&self, source: &Path) -> ConvertRequest {
        let mut request = self.request(source);
        request.quantize = QuantizeOptions::new().threshold(128).dither(false);
        request
    }
}
