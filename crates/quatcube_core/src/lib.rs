//! Core types for the quatcube visualizer
//!
//! This crate turns rotation commands into projected cube frames:
//!
//! - [`CubeModel`] - Immutable rest-pose cube geometry and edge list
//! - [`Orientation`] - The single persistent orientation quaternion
//! - [`Projection`] - Perspective projection to integer screen points
//! - [`CommandSource`] - Interactive or scripted rotation commands
//! - [`RotationInput`] - Capability the input layer implements
//! - [`DisplaySurface`] - Target that draws each projected [`Frame`]
//! - [`FramePipeline`] - Ties them together, one update per frame

mod model;
mod orientation;
mod projection;
mod command;
mod surface;
mod pipeline;

pub use model::{CubeModel, CUBE_EDGES};
pub use orientation::Orientation;
pub use projection::{Projection, ScreenPoint};
pub use command::{
    CommandSource, RotationCommand, RotationInput, ScriptProgress, ScriptTarget, SlerpScript,
};
pub use surface::{DisplaySurface, Frame};
pub use pipeline::FramePipeline;

// Re-export commonly used types from quatcube_math for convenience
pub use quatcube_math::{Quaternion, Vec3};
