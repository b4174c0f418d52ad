//! Keyboard input for the quatcube visualizer
//!
//! Maps held keys to the six axis rotation commands the core consumes
//! through [`quatcube_core::RotationInput`].

mod keyboard_controller;

pub use keyboard_controller::{HeldCommands, KeyboardController};
