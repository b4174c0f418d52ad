//! Display surface boundary
//!
//! The core hands each frame's projected points and the fixed edge list to a
//! [`DisplaySurface`]. How the lines are rasterized, colored, or clipped is up
//! to the surface.

use crate::ScreenPoint;

/// One frame of projected geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    /// Projected vertices, one per model vertex
    pub points: &'a [ScreenPoint],
    /// Vertex index pairs to draw as line segments
    pub edges: &'a [(usize, usize)],
    /// Screen midpoint, for surfaces that draw a center marker
    pub center: ScreenPoint,
}

impl<'a> Frame<'a> {
    /// Endpoints of every edge, in edge order
    pub fn segments(&self) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + 'a {
        let points = self.points;
        self.edges.iter().map(move |&(a, b)| (points[a], points[b]))
    }
}

/// A clear / draw / present target for projected frames
pub trait DisplaySurface {
    type Error;

    /// Clear, draw every edge of `frame`, and present
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}
