pub mod assembler;
pub mod frame_source;
pub mod pipeline;

pub use assembler::{derive_name, sanitize_name, AnimationAssembler, AnimationMeta};
pub use frame_source::{Canvas, Frame, FrameSource, GifFrameSource, MemoryFrameSource};
pub use pipeline::{ConvertPipeline, ConvertReport, ConvertRequest, RenderedArtifacts};
