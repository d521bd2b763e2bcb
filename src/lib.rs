//! gif2anim - animated GIF to firmware animation data
//!
//! Converts an animated GIF into a packed 1-bit-per-pixel bitmap buffer plus
//! a frame table, emitted both as a JSON descriptor and as a C/C++ header
//! matching the `AnimationFrame`/`AnimationDescriptor` structs of the
//! display firmware.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
