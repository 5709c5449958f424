//! Column-major 4x4 transform matrix.
//!
//! Element `i` holds row `i % 4` of column `i / 4` — the exact order a
//! GL-style `mat4` uniform upload consumes with transposition off, and the
//! order [`Mat4::to_cols_array`] returns.

use std::ops::Mul;

/// Column-major 4x4 `f32` matrix.
///
/// Values are immutable once built: every constructor and the `*` operator
/// return a fresh matrix, never mutate an operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    e: [f32; 16],
}

impl Mat4 {
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self {
        e: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build from 16 elements in column-major order.
    #[inline]
    pub const fn from_cols_array(e: [f32; 16]) -> Self {
        Self { e }
    }

    /// Translation by `(dx, dy, dz)`; identity elsewhere.
    #[inline]
    pub const fn from_translation(dx: f32, dy: f32, dz: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.e[12] = dx;
        m.e[13] = dy;
        m.e[14] = dz;
        m
    }

    /// Rotation about +X by `degrees`, counter-clockwise when looking down
    /// the axis toward the origin (right-handed). Any finite angle is valid;
    /// no range normalization is needed or done.
    #[inline]
    pub fn from_rotation_x(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut m = Self::IDENTITY;
        m.e[5] = c;
        m.e[6] = s;
        m.e[9] = -s;
        m.e[10] = c;
        m
    }

    /// Rotation about +Y by `degrees`. Same convention as [`Self::from_rotation_x`].
    #[inline]
    pub fn from_rotation_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut m = Self::IDENTITY;
        m.e[0] = c;
        m.e[2] = -s;
        m.e[8] = s;
        m.e[10] = c;
        m
    }

    /// Rotation about +Z by `degrees`, so `from_rotation_z(90)` maps
    /// (1, 0, 0, 1) to (0, 1, 0, 1).
    #[inline]
    pub fn from_rotation_z(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut m = Self::IDENTITY;
        m.e[0] = c;
        m.e[1] = s;
        m.e[4] = -s;
        m.e[5] = c;
        m
    }

    /// Symmetric perspective projection, GL clip conventions (z in [-1, 1]).
    ///
    /// Callers must pass `fov_y_degrees` in (0, 180), `aspect > 0` and
    /// `0 < near < far`. Nothing is validated — this runs every frame, and
    /// out-of-range geometry yields a degenerate matrix (NaN/Inf entries or
    /// a non-invertible result), not an error.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y_degrees.to_radians() * 0.5).tan();
        let inv_depth = 1.0 / (near - far);

        let mut e = [0.0_f32; 16];
        e[0] = f / aspect;
        e[5] = f;
        e[10] = (far + near) * inv_depth;
        e[11] = -1.0;
        e[14] = 2.0 * far * near * inv_depth;
        Self { e }
    }

    /// Flatten to 16 floats, column-major. A plain copy, no side effects.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.e
    }

    /// Apply to a homogeneous column vector (`self * p`).
    pub fn transform(&self, p: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0_f32; 4];
        for (r, v) in out.iter_mut().enumerate() {
            *v = self.e[r] * p[0]
                + self.e[4 + r] * p[1]
                + self.e[8 + r] * p[2]
                + self.e[12 + r] * p[3];
        }
        out
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.e
            .iter()
            .zip(other.e.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// Standard matrix product: `a * b` applies `b` first, then `a`.
    /// Associative, not commutative; rotate-then-translate and
    /// translate-then-rotate are different matrices.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut e = [0.0_f32; 16];
        for c in 0..4 {
            for r in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.e[k * 4 + r] * rhs.e[c * 4 + k];
                }
                e[c * 4 + r] = acc;
            }
        }
        Mat4 { e }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;
    /// Cross-library comparisons get a little extra slack.
    const GLAM_EPS: f32 = 1e-4;

    fn glam_eq(ours: Mat4, reference: glam::Mat4) -> bool {
        ours.abs_diff_eq(&Mat4::from_cols_array(reference.to_cols_array()), GLAM_EPS)
    }

    #[test]
    fn identity_flattens_to_exact_literal() {
        // Exact, not approximate: these are binary-representable values
        // and the element order is a caller-visible contract.
        assert_eq!(
            Mat4::identity().to_cols_array(),
            [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let m = Mat4::from_translation(1.0, 2.0, 3.0) * Mat4::from_rotation_z(33.0);
        assert!((m * Mat4::IDENTITY).abs_diff_eq(&m, EPS));
        assert!((Mat4::IDENTITY * m).abs_diff_eq(&m, EPS));
    }

    #[test]
    fn zero_angle_rotations_are_identity() {
        assert!(Mat4::from_rotation_x(0.0).abs_diff_eq(&Mat4::IDENTITY, EPS));
        assert!(Mat4::from_rotation_y(0.0).abs_diff_eq(&Mat4::IDENTITY, EPS));
        assert!(Mat4::from_rotation_z(0.0).abs_diff_eq(&Mat4::IDENTITY, EPS));
    }

    #[test]
    fn quarter_turn_about_z_maps_x_axis_to_y_axis() {
        let p = Mat4::from_rotation_z(90.0).transform([1.0, 0.0, 0.0, 1.0]);
        assert!((p[0] - 0.0).abs() < EPS);
        assert!((p[1] - 1.0).abs() < EPS);
        assert!((p[2] - 0.0).abs() < EPS);
        assert!((p[3] - 1.0).abs() < EPS);
    }

    #[test]
    fn rotations_about_one_axis_add_their_angles() {
        let lhs = Mat4::from_rotation_x(25.0) * Mat4::from_rotation_x(17.5);
        assert!(lhs.abs_diff_eq(&Mat4::from_rotation_x(42.5), EPS));

        // Periodic in 360, so wrap-around composes the same way.
        let wrapped = Mat4::from_rotation_z(350.0) * Mat4::from_rotation_z(20.0);
        assert!(wrapped.abs_diff_eq(&Mat4::from_rotation_z(10.0), EPS));
    }

    #[test]
    fn translation_composed_with_identity_is_unchanged() {
        let t = Mat4::from_translation(1.0, 2.0, 3.0);
        assert!((t * Mat4::identity()).abs_diff_eq(&t, EPS));

        let a = t.to_cols_array();
        assert_eq!(&a[12..15], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn rotation_blocks_stay_orthonormal_for_arbitrary_angles() {
        for &deg in &[0.0_f32, 37.5, -123.0, 359.9, 1234.5, -7200.25] {
            for m in [
                Mat4::from_rotation_x(deg),
                Mat4::from_rotation_y(deg),
                Mat4::from_rotation_z(deg),
            ] {
                let e = m.to_cols_array();
                let col = |c: usize| [e[c * 4], e[c * 4 + 1], e[c * 4 + 2]];
                let dot = |a: [f32; 3], b: [f32; 3]| a[0] * b[0] + a[1] * b[1] + a[2] * b[2];

                for c in 0..3 {
                    assert!((dot(col(c), col(c)) - 1.0).abs() < EPS, "unit column {c} at {deg}");
                }
                assert!(dot(col(0), col(1)).abs() < EPS);
                assert!(dot(col(1), col(2)).abs() < EPS);
                assert!(dot(col(0), col(2)).abs() < EPS);
            }
        }
    }

    #[test]
    fn perspective_matches_hand_computed_reference() {
        // f = 1 / tan(22.5 deg) for the demo's standard frustum.
        let e = Mat4::perspective(45.0, 1.0, 0.01, 100.0).to_cols_array();
        assert!((e[0] - 2.414_213_5).abs() < EPS);
        assert!((e[5] - 2.414_213_5).abs() < EPS);
        assert!((e[10] - (-1.000_200_0)).abs() < EPS);
        assert!((e[11] - (-1.0)).abs() < EPS);
        assert!((e[14] - (-0.020_002_0)).abs() < EPS);
        assert_eq!(e[15], 0.0);
        // Off-frustum entries stay zero.
        for i in [1, 2, 3, 4, 6, 7, 8, 9, 12, 13] {
            assert_eq!(e[i], 0.0, "element {i}");
        }
    }

    #[test]
    fn rotations_match_glam_reference() {
        for &deg in &[10.0_f32, 30.0, 45.0, 90.0, 215.0, -75.5] {
            let rad = deg.to_radians();
            assert!(glam_eq(Mat4::from_rotation_x(deg), glam::Mat4::from_rotation_x(rad)));
            assert!(glam_eq(Mat4::from_rotation_y(deg), glam::Mat4::from_rotation_y(rad)));
            assert!(glam_eq(Mat4::from_rotation_z(deg), glam::Mat4::from_rotation_z(rad)));
        }
    }

    #[test]
    fn perspective_matches_glam_reference() {
        let ours = Mat4::perspective(45.0, 16.0 / 9.0, 0.01, 100.0);
        let reference =
            glam::Mat4::perspective_rh_gl(45.0_f32.to_radians(), 16.0 / 9.0, 0.01, 100.0);
        assert!(glam_eq(ours, reference));
    }

    #[test]
    fn model_view_stack_matches_glam_reference() {
        // Rotate about origin, then translate away from the viewpoint:
        // the composition the render loop builds every frame.
        let ours = Mat4::from_translation(0.0, 0.0, -2.0)
            * (Mat4::from_rotation_x(30.0)
                * (Mat4::from_rotation_y(45.0) * Mat4::from_rotation_z(10.0)));

        let reference = glam::Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -2.0))
            * glam::Mat4::from_rotation_x(30.0_f32.to_radians())
            * glam::Mat4::from_rotation_y(45.0_f32.to_radians())
            * glam::Mat4::from_rotation_z(10.0_f32.to_radians());

        assert!(glam_eq(ours, reference));

        let p = ours.transform([0.5, -0.5, 0.5, 1.0]);
        let q = reference * glam::Vec4::new(0.5, -0.5, 0.5, 1.0);
        for (a, b) in p.iter().zip(q.to_array().iter()) {
            assert!((a - b).abs() < GLAM_EPS);
        }
    }

    #[test]
    fn composition_order_matters() {
        let rotate_then_translate =
            Mat4::from_translation(2.0, 0.0, 0.0) * Mat4::from_rotation_z(90.0);
        let translate_then_rotate =
            Mat4::from_rotation_z(90.0) * Mat4::from_translation(2.0, 0.0, 0.0);

        let p = rotate_then_translate.transform([1.0, 0.0, 0.0, 1.0]);
        let q = translate_then_rotate.transform([1.0, 0.0, 0.0, 1.0]);
        // (2, 1, 0) vs (0, 3, 0).
        assert!((p[0] - 2.0).abs() < EPS && (p[1] - 1.0).abs() < EPS);
        assert!((q[0] - 0.0).abs() < EPS && (q[1] - 3.0).abs() < EPS);
    }
}
