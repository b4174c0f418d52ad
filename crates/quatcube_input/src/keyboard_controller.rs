//! Keyboard controller for held rotation commands
//!
//! Controls:
//! - Q/W: Rotate about +Y / -Y
//! - D/E: Rotate about +X / -X
//! - S/A: Rotate about +Z / -Z
//!
//! A command is active for every frame its key is held. Opposing keys held
//! together cancel out once the core composes both.

use bitflags::bitflags;
use quatcube_core::{RotationCommand, RotationInput};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

bitflags! {
    /// Rotation commands whose keys are currently held
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldCommands: u8 {
        const POS_X = 1 << 0;
        const NEG_X = 1 << 1;
        const POS_Y = 1 << 2;
        const NEG_Y = 1 << 3;
        const POS_Z = 1 << 4;
        const NEG_Z = 1 << 5;
    }
}

impl HeldCommands {
    /// The flag for a single command
    pub fn from_command(command: RotationCommand) -> Self {
        match command {
            RotationCommand::PosX => Self::POS_X,
            RotationCommand::NegX => Self::NEG_X,
            RotationCommand::PosY => Self::POS_Y,
            RotationCommand::NegY => Self::NEG_Y,
            RotationCommand::PosZ => Self::POS_Z,
            RotationCommand::NegZ => Self::NEG_Z,
        }
    }
}

/// Tracks which rotation keys are held
#[derive(Clone, Debug, Default)]
pub struct KeyboardController {
    held: HeldCommands,
}

impl KeyboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation command bound to a key, if any
    pub fn command_for_key(key: KeyCode) -> Option<RotationCommand> {
        match key {
            KeyCode::KeyQ => Some(RotationCommand::PosY),
            KeyCode::KeyW => Some(RotationCommand::NegY),
            KeyCode::KeyE => Some(RotationCommand::NegX),
            KeyCode::KeyD => Some(RotationCommand::PosX),
            KeyCode::KeyA => Some(RotationCommand::NegZ),
            KeyCode::KeyS => Some(RotationCommand::PosZ),
            _ => None,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a rotation key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let Some(command) = Self::command_for_key(key) else {
            return false;
        };
        self.held.set(HeldCommands::from_command(command), state == ElementState::Pressed);
        true
    }

    /// Drop every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held = HeldCommands::empty();
    }

    /// Currently held commands
    pub fn held(&self) -> HeldCommands {
        self.held
    }

    /// Check if any rotation key is held
    pub fn is_rotating(&self) -> bool {
        !self.held.is_empty()
    }
}

impl RotationInput for KeyboardController {
    fn is_active(&self, command: RotationCommand) -> bool {
        self.held.contains(HeldCommands::from_command(command))
    }
}
