//! Renderable geometry - bridges projected frames to GPU line vertices
//!
//! Each cube edge gets its own fixed color, indexed by edge order.

use quatcube_core::{Frame, ScreenPoint};

use crate::pipeline::LineVertex;

/// Per-edge colors as 0xRRGGBB, in cube edge order (top face edge 0-1 first)
pub const EDGE_COLORS: [u32; 12] = [
    0xFFFFFF, 0x00FBFC, 0xCF00AF, 0xA2FF00,
    0xFF0000, 0x1140F0, 0xA29AEA, 0x5224A6,
    0x148845, 0xFF6909, 0x3B8B9E, 0xD7A034,
];

/// Center marker color as 0xRRGGBB
pub const MARKER_COLOR: u32 = 0x808080;

/// Half the arm length of the center marker cross, in pixels
pub const MARKER_HALF_SIZE: f32 = 4.0;

/// Convert 0xRRGGBB to opaque RGBA floats
pub fn hex_color(rgb: u32) -> [f32; 4] {
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Color for edge `index`, cycling past the table
pub fn edge_color(index: usize) -> [f32; 4] {
    hex_color(EDGE_COLORS[index % EDGE_COLORS.len()])
}

/// Colored line-list vertices ready for upload
#[derive(Clone, Debug, Default)]
pub struct LineGeometry {
    /// Two vertices per segment
    pub vertices: Vec<LineVertex>,
}

impl LineGeometry {
    /// Create empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create geometry with room for `segments` line segments
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(segments * 2),
        }
    }

    /// Collect a frame's edges, plus the center marker when requested
    pub fn from_frame(frame: &Frame<'_>, show_center_marker: bool) -> Self {
        let mut geometry = Self::with_capacity(frame.edges.len() + 2);
        geometry.add_frame(frame, show_center_marker);
        geometry
    }

    /// Append a frame's edges, plus the center marker when requested
    pub fn add_frame(&mut self, frame: &Frame<'_>, show_center_marker: bool) {
        for (i, (a, b)) in frame.segments().enumerate() {
            self.add_segment(a, b, edge_color(i));
        }
        if show_center_marker {
            self.add_marker(frame.center, hex_color(MARKER_COLOR));
        }
    }

    /// Append one segment
    pub fn add_segment(&mut self, a: ScreenPoint, b: ScreenPoint, color: [f32; 4]) {
        self.vertices.push(LineVertex::new(to_position(a), color));
        self.vertices.push(LineVertex::new(to_position(b), color));
    }

    /// Append a small cross centered on `center`
    pub fn add_marker(&mut self, center: ScreenPoint, color: [f32; 4]) {
        let [x, y] = to_position(center);
        let h = MARKER_HALF_SIZE;
        self.vertices.push(LineVertex::new([x - h, y], color));
        self.vertices.push(LineVertex::new([x + h, y], color));
        self.vertices.push(LineVertex::new([x, y - h], color));
        self.vertices.push(LineVertex::new([x, y + h], color));
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of line segments
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

fn to_position(p: ScreenPoint) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}
