//! Rotation command sources
//!
//! The orientation is driven either interactively (six discrete rotation
//! commands, each a fixed angle increment about a signed axis) or by a script
//! that slerps from the identity toward a single target. The source is picked
//! once at startup; the per-frame update only sees the delta it produces.

use quatcube_math::{compose_rotation, slerp, slerp_shortest, Quaternion, Vec3};
use serde::{Serialize, Deserialize};

/// A discrete rotation about one signed coordinate axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationCommand {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl RotationCommand {
    /// All commands, in the order they are applied within one frame
    pub const ALL: [RotationCommand; 6] = [
        RotationCommand::PosY,
        RotationCommand::NegY,
        RotationCommand::NegX,
        RotationCommand::PosX,
        RotationCommand::NegZ,
        RotationCommand::PosZ,
    ];

    /// Unit axis the command rotates about
    pub fn axis(self) -> Vec3 {
        match self {
            RotationCommand::PosX => Vec3::X,
            RotationCommand::NegX => -Vec3::X,
            RotationCommand::PosY => Vec3::Y,
            RotationCommand::NegY => -Vec3::Y,
            RotationCommand::PosZ => Vec3::Z,
            RotationCommand::NegZ => -Vec3::Z,
        }
    }
}

/// Capability exposed by the input layer
///
/// Lets the core ask whether a logical rotation command is held this frame
/// without owning any key state itself.
pub trait RotationInput {
    fn is_active(&self, command: RotationCommand) -> bool;
}

/// No input at all; used by scripted and headless runs
impl RotationInput for () {
    fn is_active(&self, _command: RotationCommand) -> bool {
        false
    }
}

/// A target orientation given as an angle (radians) about an axis
///
/// Deserializable so a default target can come from the `[script]` config
/// section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptTarget {
    pub radians: f32,
    pub axis: Vec3,
}

impl ScriptTarget {
    pub fn new(radians: f32, axis: Vec3) -> Self {
        Self { radians, axis }
    }
}

/// Progress of one scripted slerp
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptProgress {
    /// Still interpolating
    Running,
    /// `t` reached 1 on this frame
    Finished,
    /// Already finished on an earlier frame
    Idle,
}

/// Scripted slerp from `start` toward `target`
///
/// Each frame advances `t` by `step` and yields the rotation from the last
/// orientation reached to the new one, so the persistent orientation is
/// composed with deltas rather than overwritten.
#[derive(Clone, Debug)]
pub struct SlerpScript {
    start: Quaternion,
    target: Quaternion,
    last: Quaternion,
    t: f32,
    step: f32,
    shortest_path: bool,
}

impl SlerpScript {
    /// Script from identity to `compose_rotation(identity, target.radians, target.axis)`
    ///
    /// `step` must be positive for `t` to reach 1.
    pub fn new(target: ScriptTarget, step: f32) -> Self {
        debug_assert!(step > 0.0, "slerp step must be positive, got {}", step);
        let start = Quaternion::IDENTITY;
        let target = compose_rotation(start, target.radians, target.axis).normalize();
        Self {
            start,
            target,
            last: start,
            t: 0.0,
            step,
            shortest_path: false,
        }
    }

    /// Builder: take the shorter arc when start and target are > 90° apart in 4D
    pub fn with_shortest_path(mut self, enabled: bool) -> Self {
        self.shortest_path = enabled;
        self
    }

    /// Interpolation parameter in `[0, 1]`
    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    /// Target orientation
    #[inline]
    pub fn target(&self) -> Quaternion {
        self.target
    }

    /// Last orientation the script reached
    #[inline]
    pub fn last(&self) -> Quaternion {
        self.last
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.t >= 1.0
    }

    /// Restart from `t = 0`
    pub fn reset(&mut self) {
        self.last = self.start;
        self.t = 0.0;
    }

    /// Orientation at parameter `t`
    fn sample(&self, t: f32) -> Quaternion {
        if self.shortest_path {
            slerp_shortest(self.start, self.target, t)
        } else {
            slerp(self.start, self.target, t)
        }
    }

    /// Advance one frame
    ///
    /// Returns the delta rotation `next * conjugate(last)` together with the
    /// progress. Left-multiplying the running orientation by successive deltas
    /// telescopes to the slerp path. The final step is clamped so that `t`
    /// lands exactly on 1.
    pub fn advance(&mut self) -> (Quaternion, ScriptProgress) {
        if self.is_finished() {
            return (Quaternion::IDENTITY, ScriptProgress::Idle);
        }

        self.t = (self.t + self.step).min(1.0);
        let next = self.sample(self.t);
        let delta = next * self.last.conjugate();
        self.last = next;

        let progress = if self.is_finished() {
            ScriptProgress::Finished
        } else {
            ScriptProgress::Running
        };
        (delta, progress)
    }
}

/// Where the per-frame rotation comes from
#[derive(Clone, Debug)]
pub enum CommandSource {
    /// Held rotation commands, `speed` radians per command per frame
    Interactive { speed: f32 },
    /// Scripted slerp toward a single target
    Scripted(SlerpScript),
}

impl CommandSource {
    pub fn interactive(speed: f32) -> Self {
        CommandSource::Interactive { speed }
    }

    pub fn scripted(script: SlerpScript) -> Self {
        CommandSource::Scripted(script)
    }

    /// Human-readable mode name for logs and titles
    pub fn mode_name(&self) -> &'static str {
        match self {
            CommandSource::Interactive { .. } => "interactive",
            CommandSource::Scripted(_) => "scripted",
        }
    }

    /// Compute this frame's delta rotation (not normalized)
    pub fn next_delta<I: RotationInput + ?Sized>(&mut self, input: &I) -> (Quaternion, ScriptProgress) {
        match self {
            CommandSource::Interactive { speed } => {
                let mut delta = Quaternion::IDENTITY;
                for command in RotationCommand::ALL {
                    if input.is_active(command) {
                        delta = compose_rotation(delta, *speed, command.axis());
                    }
                }
                (delta, ScriptProgress::Idle)
            }
            CommandSource::Scripted(script) => script.advance(),
        }
    }

    /// Restart any progress the source keeps
    pub fn reset(&mut self) {
        if let CommandSource::Scripted(script) = self {
            script.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quatcube_math::angle_between;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn quat_approx_eq(a: Quaternion, b: Quaternion) -> bool {
        (a.w - b.w).abs() < EPSILON
            && (a.im.x - b.im.x).abs() < EPSILON
            && (a.im.y - b.im.y).abs() < EPSILON
            && (a.im.z - b.im.z).abs() < EPSILON
    }

    struct Held(Vec<RotationCommand>);

    impl RotationInput for Held {
        fn is_active(&self, command: RotationCommand) -> bool {
            self.0.contains(&command)
        }
    }

    #[test]
    fn test_axes_are_unit_and_opposed() {
        assert_eq!(RotationCommand::PosX.axis(), -RotationCommand::NegX.axis());
        assert_eq!(RotationCommand::PosY.axis(), -RotationCommand::NegY.axis());
        assert_eq!(RotationCommand::PosZ.axis(), -RotationCommand::NegZ.axis());
        for c in RotationCommand::ALL {
            assert_eq!(c.axis().length(), 1.0);
        }
    }

    #[test]
    fn test_interactive_no_input_is_identity() {
        let mut source = CommandSource::interactive(0.01);
        let (delta, _) = source.next_delta(&());
        assert_eq!(delta, Quaternion::IDENTITY);
    }

    #[test]
    fn test_interactive_single_command() {
        let mut source = CommandSource::interactive(0.25);
        let (delta, progress) = source.next_delta(&Held(vec![RotationCommand::PosZ]));
        assert_eq!(progress, ScriptProgress::Idle);
        assert!(quat_approx_eq(delta, Quaternion::from_axis_angle(Vec3::Z, 0.25)));
    }

    #[test]
    fn test_interactive_opposed_commands_cancel() {
        let mut source = CommandSource::interactive(0.1);
        let held = Held(vec![RotationCommand::PosX, RotationCommand::NegX]);
        let (delta, _) = source.next_delta(&held);
        assert!(quat_approx_eq(delta.normalize(), Quaternion::IDENTITY));
    }

    #[test]
    fn test_script_reaches_target_exactly() {
        let target = ScriptTarget::new(FRAC_PI_2, Vec3::Y);
        let mut script = SlerpScript::new(target, 0.3);

        let mut orientation = Quaternion::IDENTITY;
        let mut frames = 0;
        loop {
            let (delta, progress) = script.advance();
            orientation = (delta * orientation).normalize();
            frames += 1;
            if progress == ScriptProgress::Finished {
                break;
            }
            assert_eq!(progress, ScriptProgress::Running);
        }

        // 0.3, 0.6, 0.9, 1.0
        assert_eq!(frames, 4);
        assert_eq!(script.t(), 1.0);
        assert!(quat_approx_eq(orientation, script.target()), "got {:?}", orientation);
        assert!(quat_approx_eq(script.last(), script.target()));
    }

    #[test]
    fn test_script_idle_after_finish() {
        let mut script = SlerpScript::new(ScriptTarget::new(1.0, Vec3::X), 1.0);
        assert_eq!(script.advance().1, ScriptProgress::Finished);
        let (delta, progress) = script.advance();
        assert_eq!(progress, ScriptProgress::Idle);
        assert_eq!(delta, Quaternion::IDENTITY);
    }

    #[test]
    fn test_script_delta_preserves_prior_orientation() {
        // Orientation accumulated before the script ran is kept, not overwritten
        let prior = Quaternion::from_axis_angle(Vec3::X, 0.7);
        let mut script = SlerpScript::new(ScriptTarget::new(1.2, Vec3::Z), 0.5);

        let mut orientation = prior;
        while !script.is_finished() {
            let (delta, _) = script.advance();
            orientation = (delta * orientation).normalize();
        }

        let expected = script.target() * prior;
        assert!(quat_approx_eq(orientation, expected), "Expected {:?}, got {:?}", expected, orientation);
    }

    #[test]
    fn test_script_progress_is_monotonic() {
        let mut script = SlerpScript::new(ScriptTarget::new(2.0, Vec3::new(1.0, 1.0, 1.0)), 0.1);
        let mut previous = 0.0;
        while !script.is_finished() {
            script.advance();
            let angle = angle_between(script.last(), Quaternion::IDENTITY);
            assert!(angle >= previous - 1e-4);
            previous = angle;
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "slerp step must be positive")]
    fn test_script_rejects_non_positive_step() {
        SlerpScript::new(ScriptTarget::new(1.0, Vec3::Y), -0.1);
    }

    #[test]
    fn test_script_reset() {
        let mut script = SlerpScript::new(ScriptTarget::new(1.0, Vec3::Y), 0.5);
        script.advance();
        script.advance();
        assert!(script.is_finished());

        script.reset();
        assert_eq!(script.t(), 0.0);
        assert_eq!(script.last(), Quaternion::IDENTITY);
        assert!(!script.is_finished());
    }

    #[test]
    fn test_script_long_way_vs_shortest() {
        // 270° about Z: the quaternion has a negative scalar part
        let target = ScriptTarget::new(3.0 * FRAC_PI_2, Vec3::Z);
        let mut long = SlerpScript::new(target, 0.5);
        let mut short = SlerpScript::new(target, 0.5).with_shortest_path(true);

        long.advance();
        short.advance();

        let long_angle = angle_between(long.last(), Quaternion::IDENTITY);
        let short_angle = angle_between(short.last(), Quaternion::IDENTITY);
        assert!((long_angle - 3.0 * FRAC_PI_2 / 2.0).abs() < 1e-4);
        assert!((short_angle - FRAC_PI_2 / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_mode_name() {
        assert_eq!(CommandSource::interactive(0.01).mode_name(), "interactive");
        let script = SlerpScript::new(ScriptTarget::new(1.0, Vec3::X), 0.1);
        assert_eq!(CommandSource::scripted(script).mode_name(), "scripted");
    }
}
