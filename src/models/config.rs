use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "GIF2ANIM_CONFIG";

/// Conversion defaults loaded from a YAML file.
///
/// Every field is optional in the file; command-line flags override these.
///
/// ```yaml
/// namespace: "robot::eyes"
/// json_dir: "build/animations"
/// header_dir: "firmware/include/animations"
/// threshold: 110
/// dither: false
/// invert: true
/// bytes_per_line: 16
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// `::`-separated namespace wrapping the generated declarations
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Directory for `<name>.json` when no explicit path is given
    #[serde(default = "default_json_dir")]
    pub json_dir: PathBuf,

    /// Directory for `<name>.h` when no explicit path is given
    #[serde(default = "default_header_dir")]
    pub header_dir: PathBuf,

    /// Manual threshold (0-255); absent means dithering decides
    #[serde(default)]
    pub threshold: Option<i32>,

    /// Floyd-Steinberg dithering when no threshold is set
    #[serde(default = "default_dither")]
    pub dither: bool,

    /// Complement the packed bitmaps
    #[serde(default)]
    pub invert: bool,

    /// Hex values per line in the byte table
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: usize,
}

fn default_namespace() -> String {
    "animations::generated".to_string()
}

fn default_json_dir() -> PathBuf {
    PathBuf::from("animations")
}

fn default_header_dir() -> PathBuf {
    PathBuf::from("include/animations")
}

fn default_dither() -> bool {
    true
}

fn default_bytes_per_line() -> usize {
    12
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            json_dir: default_json_dir(),
            header_dir: default_header_dir(),
            threshold: None,
            dither: default_dither(),
            invert: false,
            bytes_per_line: default_bytes_per_line(),
        }
    }
}

impl ConvertConfig {
    /// Load a config file. A missing or unparsable file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::ConfigNotFound(path.to_path_buf())
            } else {
                ConfigError::ConfigParse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })?;
        let config = Self::from_yaml(&content).map_err(|e| ConfigError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load from an explicit path, else from [`CONFIG_ENV`], else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
