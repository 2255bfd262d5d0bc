//! Core types shared across the build pipeline.

mod mode;

pub use mode::{BuildMode, DEFAULT_ENV_VAR};
