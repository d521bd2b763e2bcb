use std::path::{Path, PathBuf};

use mono_bitmap::QuantizeOptions;

use crate::error::{ConfigError, ConvertError, InternalError};
use crate::models::{AnimationRecord, ConvertConfig};
use crate::rendering::{
    descriptor_payload, header_payload, render_descriptor, render_format_header,
    render_static_data, HeaderOptions,
};
use crate::services::assembler::{derive_name, AnimationAssembler, AnimationMeta};
use crate::services::frame_source::{frames, FrameSource, GifFrameSource};

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    /// Animated GIF to convert
    pub source: PathBuf,
    /// Symbol name; defaults to the source file stem
    pub name: Option<String>,
    /// Descriptor path; defaults to `<json_dir>/<name>.json`
    pub json_out: Option<PathBuf>,
    /// Static-data path; defaults to `<header_dir>/<name>.h`
    pub header_out: Option<PathBuf>,
    /// Also write the support header here
    pub format_header_out: Option<PathBuf>,
    pub json_dir: PathBuf,
    pub header_dir: PathBuf,
    pub quantize: QuantizeOptions,
    pub header: HeaderOptions,
}

impl ConvertRequest {
    /// A request for `source` with every default taken from `config`.
    pub fn from_config(source: impl Into<PathBuf>, config: &ConvertConfig) -> Self {
        Self {
            source: source.into(),
            name: None,
            json_out: None,
            header_out: None,
            format_header_out: None,
            json_dir: config.json_dir.clone(),
            header_dir: config.header_dir.clone(),
            quantize: QuantizeOptions::new()
                .maybe_threshold(config.threshold)
                .dither(config.dither)
                .invert(config.invert),
            header: HeaderOptions {
                namespace: config.namespace.clone(),
                bytes_per_line: config.bytes_per_line,
            },
        }
    }
}

/// Both artifacts, rendered and cross-checked, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub descriptor: String,
    pub static_data: String,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub name: String,
    pub frame_count: usize,
    pub bytes_per_frame: usize,
    pub total_bytes: usize,
    pub json_path: PathBuf,
    pub header_path: PathBuf,
    pub format_header_path: Option<PathBuf>,
}

/// Pipeline that orchestrates decode → assemble → render → write
pub struct ConvertPipeline {
    request: ConvertRequest,
}

impl ConvertPipeline {
    pub fn new(request: ConvertRequest) -> Self {
        Self { request }
    }

    /// Run the whole conversion.
    ///
    /// Both artifacts are rendered and checked before the first file is
    /// opened. A failure while writing can leave the descriptor written
    /// without the header; the error is the only signal of that.
    pub fn run(&self) -> Result<ConvertReport, ConvertError> {
        let record = self.build_record()?;
        let artifacts = self.render(&record)?;

        let json_path = self.json_path(record.name());
        let header_path = self.header_path(record.name());
        self.check_output_paths(&json_path, &header_path)?;

        write_artifact(&json_path, &artifacts.descriptor)?;
        write_artifact(&header_path, &artifacts.static_data)?;

        let format_header_path = match &self.request.format_header_out {
            Some(path) => {
                write_artifact(path, &render_format_header())?;
                Some(path.clone())
            }
            None => None,
        };

        Ok(ConvertReport {
            name: record.name().to_string(),
            frame_count: record.frame_count(),
            bytes_per_frame: record.bytes_per_frame(),
            total_bytes: record.total_bytes(),
            json_path,
            header_path,
            format_header_path,
        })
    }

    /// Decode the source and assemble the animation record.
    pub fn build_record(&self) -> Result<AnimationRecord, ConvertError> {
        let mut source = GifFrameSource::open(&self.request.source)?;
        self.assemble_from(&mut source)
    }

    /// Assemble from any frame source, using this request's name and options.
    pub fn assemble_from<S: FrameSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<AnimationRecord, ConvertError> {
        let meta = AnimationMeta {
            name: derive_name(self.request.name.as_deref(), &self.request.source),
            source_path: self.request.source.display().to_string(),
            canvas: source.canvas(),
        };
        let assembler = AnimationAssembler::new(self.request.quantize.clone());
        let record = assembler.assemble(meta, frames(source))?;

        tracing::info!(
            name = %record.name(),
            frames = record.frame_count(),
            width = record.width(),
            height = record.height(),
            bytes = record.total_bytes(),
            "Assembled animation"
        );
        Ok(record)
    }

    /// Render both artifacts and confirm they carry the same bytes.
    pub fn render(&self, record: &AnimationRecord) -> Result<RenderedArtifacts, ConvertError> {
        let descriptor = render_descriptor(record).map_err(InternalError::from)?;
        let static_data = render_static_data(record, &self.request.header);

        let expected = record.bitmap_buffer();
        let from_json =
            descriptor_payload(&descriptor).map_err(|source| InternalError::Readback {
                artifact: "descriptor",
                source,
            })?;
        let from_header =
            header_payload(&static_data, record.name()).map_err(|source| {
                InternalError::Readback {
                    artifact: "header",
                    source,
                }
            })?;
        if from_json != expected || from_header != expected {
            return Err(InternalError::ArtifactMismatch {
                expected: expected.len(),
                descriptor: from_json.len(),
                header: from_header.len(),
            }
            .into());
        }

        Ok(RenderedArtifacts {
            descriptor,
            static_data,
        })
    }

    pub fn json_path(&self, name: &str) -> PathBuf {
        self.request
            .json_out
            .clone()
            .unwrap_or_else(|| self.request.json_dir.join(format!("{name}.json")))
    }

    pub fn header_path(&self, name: &str) -> PathBuf {
        self.request
            .header_out
            .clone()
            .unwrap_or_else(|| self.request.header_dir.join(format!("{name}.h")))
    }

    fn check_output_paths(&self, json: &Path, header: &Path) -> Result<(), ConvertError> {
        let mut paths = vec![json, header];
        if let Some(format) = &self.request.format_header_out {
            paths.push(format);
        }
        for path in &paths {
            validate_output_path(path)?;
        }
        for (i, a) in paths.iter().enumerate() {
            if paths[i + 1..].contains(a) {
                return Err(ConfigError::InvalidOutputPath {
                    path: a.to_path_buf(),
                    reason: "used for more than one artifact",
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Reject paths that can never be written as a file.
pub fn validate_output_path(path: &Path) -> Result<(), ConfigError> {
    if path.file_name().is_none() {
        return Err(ConfigError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "has no file name",
        });
    }
    if path.is_dir() {
        return Err(ConfigError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "is a directory",
        });
    }
    Ok(())
}

/// Create parent directories and write `contents` to `path`.
fn write_artifact(path: &Path, contents: &str) -> Result<(), ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
    Ok(())
}
