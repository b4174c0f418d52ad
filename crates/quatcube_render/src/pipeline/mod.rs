//! Rendering pipeline components
//!
//! A single line-list pipeline for drawing the projected cube.

pub mod types;
pub mod line_pipeline;

pub use types::{LineUniforms, LineVertex};
pub use line_pipeline::{LinePipeline, DEFAULT_VERTEX_CAPACITY};
