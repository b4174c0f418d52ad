//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like TogglePause and Exit.
//! Rotation keys (QWE/ASD) are NOT mapped here - they go directly to KeyboardController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not rotation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Suspend or resume orientation updates (P key)
    TogglePause,
    /// Return to the rest pose (R key)
    ResetOrientation,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for rotation keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyP => Some(InputAction::TogglePause),
            KeyCode::KeyR => Some(InputAction::ResetOrientation),
            _ => None,
        }
    }
}
