use std::path::PathBuf;

use mono_bitmap::BitmapError;
use thiserror::Error;

/// Top-level error of a conversion run.
///
/// Every variant aborts the run. [`ConvertError::exit_code`] maps the
/// category to the process exit status.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Process exit status for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::Input(_) => 2,
            ConvertError::Config(_) | ConvertError::Io { .. } => 3,
            ConvertError::Internal(_) => 4,
        }
    }
}

/// Problems with the source image.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Source not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: gif::DecodingError,
    },

    #[error("Input must be animated: {} has {frames} frame(s)", .path.display())]
    NotAnimated { path: PathBuf, frames: usize },

    #[error("Malformed frame {index}: {source}")]
    MalformedFrame {
        index: usize,
        #[source]
        source: BitmapError,
    },
}

/// Invalid settings, detected before any artifact is written.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Animation has no frames")]
    NoFrames,

    #[error("Invalid output path {}: {reason}", .path.display())]
    InvalidOutputPath { path: PathBuf, reason: &'static str },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },
}

/// Broken invariants between decoding, packing, and emission.
///
/// These point at a defect upstream rather than bad user input.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error(
        "Frame {index} is {actual_width}x{actual_height}, canvas is {expected_width}x{expected_height}"
    )]
    CanvasMismatch {
        index: usize,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Frame {index} packed to {actual} bytes, expected {expected}")]
    FrameSizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Packing frame {index} failed: {source}")]
    Pack {
        index: usize,
        #[source]
        source: BitmapError,
    },

    #[error("Descriptor rendering failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not read bytes back from the {artifact}: {source}")]
    Readback {
        artifact: &'static str,
        #[source]
        source: ReadbackError,
    },

    #[error(
        "Artifacts disagree: bitmap buffer is {expected} bytes, descriptor carries {descriptor}, header carries {header}"
    )]
    ArtifactMismatch {
        expected: usize,
        descriptor: usize,
        header: usize,
    },
}

/// Why payload bytes could not be recovered from a rendered artifact.
#[derive(Debug, Error)]
pub enum ReadbackError {
    #[error("descriptor is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame {index} offset {offset} does not follow previous frames ({expected} bytes)")]
    OffsetGap {
        index: usize,
        offset: usize,
        expected: usize,
    },

    #[error("frame {index} has invalid hex token {token:?}")]
    InvalidToken { index: usize, token: String },

    #[error("byte table {0} not found")]
    TableNotFound(String),

    #[error("byte table {0} is not terminated")]
    Unterminated(String),

    #[error("invalid byte literal {0:?}")]
    InvalidLiteral(String),
}
