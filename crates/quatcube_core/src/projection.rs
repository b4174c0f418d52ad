//! Perspective projection from view space to screen pixels
//!
//! The camera sits at the origin looking down +Z. Rotated model vertices are
//! pushed `depth_offset` units along Z, divided by their depth, and mapped
//! from the near-plane frustum onto the screen. Screen origin is the top-left
//! corner.

use quatcube_math::Vec3;

/// An integer pixel coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed view parameters for the perspective projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near plane distance
    pub near: f32,
    /// Distance added to each vertex's Z to place the model in front of the camera
    pub depth_offset: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            fov_degrees: 90.0,
            near: 1.0,
            // cube edge (10) + near plane (1) + 10 units of clearance
            depth_offset: 21.0,
        }
    }
}

impl Projection {
    /// Builder: set screen size
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Builder: set field of view in degrees
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    /// Builder: set near plane distance
    pub fn with_near(mut self, near: f32) -> Self {
        self.near = near;
        self
    }

    /// Builder: set the view-axis offset of the model
    pub fn with_depth_offset(mut self, depth_offset: f32) -> Self {
        self.depth_offset = depth_offset;
        self
    }

    /// Width over height
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.screen_width as f32 / self.screen_height as f32
    }

    /// Half-height of the frustum at the near plane
    #[inline]
    pub fn top(&self) -> f32 {
        (self.fov_degrees / 2.0).to_radians().tan() * self.near
    }

    /// Half-width of the frustum at the near plane
    #[inline]
    pub fn right(&self) -> f32 {
        self.top() * self.aspect()
    }

    /// Screen midpoint in pixels
    pub fn screen_mid(&self) -> ScreenPoint {
        ScreenPoint::new(
            (self.screen_width / 2) as i32,
            (self.screen_height / 2) as i32,
        )
    }

    /// Project one rotated vertex to unrounded screen coordinates
    ///
    /// A vertex at (or behind) the camera plane divides by a depth near zero
    /// and lands far off screen or at a non-finite coordinate.
    pub fn project_point(&self, v: Vec3) -> (f32, f32) {
        let top = self.top();
        let right = self.right();
        let w = v.z + self.depth_offset;

        let x = ((v.x / w) + right) / (2.0 * right) * self.screen_width as f32;
        let y = ((v.y / w) + top) / (2.0 * top) * self.screen_height as f32;
        (x, y)
    }

    /// Project one rotated vertex and round to a pixel
    ///
    /// Non-finite coordinates saturate (`NaN` becomes 0); clipping is left to
    /// the display surface.
    pub fn project(&self, v: Vec3) -> ScreenPoint {
        let (x, y) = self.project_point(v);
        ScreenPoint::new(x.round() as i32, y.round() as i32)
    }

    /// Project all rotated vertices of a model
    pub fn project_all<const N: usize>(&self, vertices: &[Vec3; N]) -> [ScreenPoint; N] {
        vertices.map(|v| self.project(v))
    }
}
