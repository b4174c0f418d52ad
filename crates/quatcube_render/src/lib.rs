//! Line rendering for the quatcube visualizer
//!
//! This crate draws projected cube frames with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::LinePipeline`] - Line-list pipeline in pixel coordinates
//! - [`renderable::LineGeometry`] - Converts a [`quatcube_core::Frame`] to colored line vertices
//! - [`RenderError`] - Failures from adapter selection through presentation

pub mod context;
pub mod error;
pub mod pipeline;
pub mod renderable;

pub use error::RenderError;
pub use renderable::{edge_color, hex_color, LineGeometry, EDGE_COLORS, MARKER_COLOR, MARKER_HALF_SIZE};
