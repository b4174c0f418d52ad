//! Command-line interface
//!
//! `quatcube [ANGLE AXIS_X AXIS_Y AXIS_Z] [--degrees] [--config DIR] [--headless FRAMES]`
//!
//! With no positionals the cube is driven from the keyboard. With all four it
//! slerps from the rest pose to the rotation of ANGLE about the axis.

use std::path::PathBuf;

use clap::Parser;
use quatcube_core::{ScriptTarget, Vec3};

/// Quaternion cube rotation visualizer
#[derive(Parser, Debug, Clone)]
#[command(name = "quatcube", version, about)]
pub struct Cli {
    /// Target rotation angle (radians unless --degrees)
    #[arg(allow_negative_numbers = true, requires_all = ["axis_x", "axis_y", "axis_z"])]
    pub angle: Option<f32>,

    /// Rotation axis X component
    #[arg(allow_negative_numbers = true)]
    pub axis_x: Option<f32>,

    /// Rotation axis Y component
    #[arg(allow_negative_numbers = true)]
    pub axis_y: Option<f32>,

    /// Rotation axis Z component
    #[arg(allow_negative_numbers = true)]
    pub axis_z: Option<f32>,

    /// Interpret ANGLE in degrees
    #[arg(long)]
    pub degrees: bool,

    /// Directory holding default.toml and user.toml
    #[arg(long, value_name = "DIR", default_value = "config")]
    pub config: PathBuf,

    /// Run this many frames without a window and print the final points
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

impl Cli {
    /// Validated scripted target, or `None` for interactive mode
    pub fn target(&self) -> Result<Option<ScriptTarget>, CliError> {
        let (Some(angle), Some(x), Some(y), Some(z)) =
            (self.angle, self.axis_x, self.axis_y, self.axis_z)
        else {
            return Ok(None);
        };

        let radians = if self.degrees { angle.to_radians() } else { angle };
        if !radians.is_finite() {
            return Err(CliError::NonFiniteAngle(angle));
        }

        let axis = Vec3::new(x, y, z);
        if !axis.is_finite() {
            return Err(CliError::NonFiniteAxis([x, y, z]));
        }
        if axis.length_squared() == 0.0 {
            return Err(CliError::ZeroAxis);
        }

        Ok(Some(ScriptTarget::new(radians, axis)))
    }
}

/// Invalid startup rotation
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    /// Axis has zero length
    ZeroAxis,
    /// Angle is NaN or infinite
    NonFiniteAngle(f32),
    /// Axis has a NaN or infinite component
    NonFiniteAxis([f32; 3]),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ZeroAxis => write!(f, "Rotation axis must be non-zero"),
            CliError::NonFiniteAngle(angle) => write!(f, "Rotation angle must be finite, got {}", angle),
            CliError::NonFiniteAxis(axis) => write!(
                f,
                "Rotation axis must be finite, got ({}, {}, {})",
                axis[0], axis[1], axis[2]
            ),
        }
    }
}

impl std::error::Error for CliError {}
