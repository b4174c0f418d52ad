//! Persistent orientation state
//!
//! One unit quaternion: the cube's attitude relative to its rest pose.

use quatcube_math::Quaternion;

/// The cube's current attitude
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    quat: Quaternion,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation {
    /// Start at the rest pose
    pub fn new() -> Self {
        Self {
            quat: Quaternion::IDENTITY,
        }
    }

    /// Current unit quaternion
    #[inline]
    pub fn quaternion(&self) -> Quaternion {
        self.quat
    }

    /// Apply `delta` after the current rotation and renormalize
    ///
    /// Renormalizing on every update keeps round-off from accumulating into
    /// a scale factor.
    pub fn apply(&mut self, delta: Quaternion) {
        self.quat = (delta * self.quat).normalize();
    }

    /// Back to the rest pose
    pub fn reset(&mut self) {
        self.quat = Quaternion::IDENTITY;
    }
}
