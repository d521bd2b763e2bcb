pub mod animation;
pub mod config;
pub mod layout;

pub use animation::{AnimationRecord, PackedFrame};
pub use config::{ConvertConfig, CONFIG_ENV};
pub use layout::{StructLayout, ANIMATION_DESCRIPTOR, ANIMATION_FRAME};
