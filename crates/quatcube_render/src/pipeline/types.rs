//! GPU-compatible data types for the line pipeline
//!
//! These types match the layouts in `line.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A line endpoint in pixel coordinates with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Pixel position, origin top-left, y down
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for pixel to clip-space conversion
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineUniforms {
    /// Surface size in pixels
    pub screen_size: [f32; 2],
    /// Padding to 16 bytes
    pub _padding: [f32; 2],
}

impl LineUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen_size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}
