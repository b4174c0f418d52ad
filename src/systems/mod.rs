//! Application systems
//!
//! Window, rendering, and simulation kept apart from the event loop in main.rs.

mod headless;
mod render;
mod simulation;
mod window;

pub use headless::LogSurface;
pub use render::RenderSystem;
pub use simulation::SimulationSystem;
pub use window::{format_title, WindowError, WindowSystem};
