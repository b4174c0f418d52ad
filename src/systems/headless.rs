//! Headless display surface
//!
//! Stands in for the GPU surface when running without a window. Each frame's
//! segments are logged at trace level and the last frame is kept.

use std::convert::Infallible;
use quatcube_core::{DisplaySurface, Frame, ScreenPoint};

/// Logs frames instead of drawing them
#[derive(Debug, Default)]
pub struct LogSurface {
    frames_presented: u64,
    last_segments: Vec<(ScreenPoint, ScreenPoint)>,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Segments of the most recent frame
    pub fn last_segments(&self) -> &[(ScreenPoint, ScreenPoint)] {
        &self.last_segments
    }
}

impl DisplaySurface for LogSurface {
    type Error = Infallible;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Infallible> {
        self.frames_presented += 1;
        self.last_segments.clear();
        self.last_segments.extend(frame.segments());
        log::trace!("Frame {}: {:?}", self.frames_presented, frame.points);
        Ok(())
    }
}
