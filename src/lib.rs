//! quatcube - quaternion cube rotation visualizer
//!
//! Application layer: configuration, command line, key mapping, and the
//! window/render/simulation systems driven by the event loop in `main.rs`.

pub mod cli;
pub mod config;
pub mod input;
pub mod systems;
