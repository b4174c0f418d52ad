//! Orientation simulation system
//!
//! Manages the per-frame loop including:
//! - Building the frame pipeline from config and the startup target
//! - One orientation update per frame
//! - Frame rate reporting

use std::time::{Duration, Instant};
use quatcube_core::{
    DisplaySurface, FramePipeline, Quaternion, RotationInput, ScreenPoint, ScriptProgress,
    ScriptTarget,
};
use crate::config::AppConfig;

/// How often the measured frame rate is logged
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Manages the orientation update loop
pub struct SimulationSystem {
    pipeline: FramePipeline,
    interval_start: Instant,
    interval_frames: u32,
}

impl SimulationSystem {
    /// Create a new simulation system
    ///
    /// A `target` selects scripted mode; `None` selects interactive mode.
    pub fn new(config: &AppConfig, target: Option<ScriptTarget>) -> Self {
        let source = config.command_source(target);
        match target {
            Some(t) => log::info!(
                "Scripted mode: {:.4} rad about ({}, {}, {}), step {}",
                t.radians, t.axis.x, t.axis.y, t.axis.z, config.script.step
            ),
            None => log::info!(
                "Interactive mode: {} rad per frame per held key",
                config.input.rotate_speed
            ),
        }

        Self {
            pipeline: FramePipeline::new(config.cube(), config.projection(), source),
            interval_start: Instant::now(),
            interval_frames: 0,
        }
    }

    /// Run one frame: update the orientation, then present to `surface`
    pub fn run_frame<I, S>(&mut self, input: &I, surface: &mut S) -> Result<ScriptProgress, S::Error>
    where
        I: RotationInput + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        self.track_frame_rate();
        self.pipeline.step(input, surface)
    }

    /// Toggle pause, returning the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.pipeline.toggle_pause()
    }

    /// Back to the rest pose
    pub fn reset(&mut self) {
        self.pipeline.reset();
    }

    pub fn is_paused(&self) -> bool {
        self.pipeline.is_paused()
    }

    /// Current orientation
    pub fn orientation(&self) -> Quaternion {
        self.pipeline.orientation().quaternion()
    }

    /// Last projected points
    pub fn points(&self) -> &[ScreenPoint; 8] {
        self.pipeline.points()
    }

    fn track_frame_rate(&mut self) {
        self.interval_frames += 1;
        let elapsed = self.interval_start.elapsed();
        if elapsed >= FPS_LOG_INTERVAL {
            log::debug!(
                "{:.1} fps",
                self.interval_frames as f32 / elapsed.as_secs_f32()
            );
            self.interval_start = Instant::now();
            self.interval_frames = 0;
        }
    }
}
