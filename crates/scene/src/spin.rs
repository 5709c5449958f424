//! Per-frame animation state for the spinning cube.

use mathlib::Mat4;

/// Degrees added per frame on each axis. Deliberately co-prime-ish so the
/// cube never settles into a short repeating orbit.
pub const STEP_X: f32 = 0.15;
pub const STEP_Y: f32 = 0.10;
pub const STEP_Z: f32 = 0.05;

/// Per-axis rotation angles in degrees, kept in [0, 360).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub angle_x: f32,
    pub angle_y: f32,
    pub angle_z: f32,
}

impl Spin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame, wrapping each angle back into [0, 360).
    pub fn advance(&mut self) {
        self.angle_x += STEP_X;
        self.angle_y += STEP_Y;
        self.angle_z += STEP_Z;
        for a in [&mut self.angle_x, &mut self.angle_y, &mut self.angle_z] {
            if *a >= 360.0 {
                *a -= 360.0;
            }
        }
    }

    /// Model-view for a cube spun about the origin, then pushed `distance`
    /// units away from the viewpoint (down -Z).
    pub fn model_view(&self, distance: f32) -> Mat4 {
        Mat4::from_translation(0.0, 0.0, -distance)
            * Mat4::from_rotation_x(self.angle_x)
            * Mat4::from_rotation_y(self.angle_y)
            * Mat4::from_rotation_z(self.angle_z)
    }
}
