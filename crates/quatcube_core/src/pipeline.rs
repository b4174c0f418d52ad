//! Per-frame update and projection
//!
//! [`FramePipeline`] owns the orientation, the command source and the rest-pose
//! model. Each frame it:
//! 1. Asks the command source for a delta rotation (unless paused)
//! 2. Composes the delta into the orientation and renormalizes
//! 3. Rotates the rest pose by the orientation
//! 4. Projects the rotated vertices to screen points
//! 5. Hands the points and edges to a display surface

use crate::{
    CommandSource, CubeModel, DisplaySurface, Frame, Orientation, Projection, RotationInput,
    ScreenPoint, ScriptProgress,
};

/// Owns everything needed to turn input into a projected frame
pub struct FramePipeline {
    model: CubeModel,
    projection: Projection,
    orientation: Orientation,
    source: CommandSource,
    paused: bool,
    /// Last computed projection; reused while paused
    points: [ScreenPoint; 8],
    frame_count: u64,
}

impl FramePipeline {
    /// Create a pipeline at the rest pose
    pub fn new(model: CubeModel, projection: Projection, source: CommandSource) -> Self {
        let orientation = Orientation::new();
        let points = projection.project_all(&model.posed(orientation.quaternion()));
        Self {
            model,
            projection,
            orientation,
            source,
            paused: false,
            points,
            frame_count: 0,
        }
    }

    /// Run one orientation update and reproject
    ///
    /// While paused nothing changes and the previous points are kept.
    pub fn update<I: RotationInput + ?Sized>(&mut self, input: &I) -> ScriptProgress {
        self.frame_count += 1;
        if self.paused {
            return ScriptProgress::Idle;
        }

        let (delta, progress) = self.source.next_delta(input);
        self.orientation.apply(delta);
        self.reproject();

        if progress == ScriptProgress::Finished {
            let (axis, angle) = self.orientation.quaternion().to_axis_angle();
            log::info!(
                "Scripted rotation finished after {} frames: {:.3} rad about ({:.3}, {:.3}, {:.3})",
                self.frame_count, angle, axis.x, axis.y, axis.z
            );
        }
        progress
    }

    /// Hand the current frame to a display surface
    pub fn render<S: DisplaySurface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.present(&self.frame())
    }

    /// Update then render
    pub fn step<I, S>(&mut self, input: &I, surface: &mut S) -> Result<ScriptProgress, S::Error>
    where
        I: RotationInput + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let progress = self.update(input);
        self.render(surface)?;
        Ok(progress)
    }

    /// The current frame's geometry
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            points: &self.points,
            edges: self.model.edges(),
            center: self.projection.screen_mid(),
        }
    }

    /// Toggle pause, returning the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Orientation updates {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Back to the rest pose; a scripted source starts over
    pub fn reset(&mut self) {
        self.orientation.reset();
        self.source.reset();
        self.reproject();
        log::info!("Orientation reset to rest pose");
    }

    #[inline]
    pub fn points(&self) -> &[ScreenPoint; 8] {
        &self.points
    }

    #[inline]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    #[inline]
    pub fn source(&self) -> &CommandSource {
        &self.source
    }

    /// Frames processed so far, paused ones included
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn reproject(&mut self) {
        let posed = self.model.posed(self.orientation.quaternion());
        self.points = self.projection.project_all(&posed);
    }
}
