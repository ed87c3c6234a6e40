//! Elementary color matrices
//!
//! Each constructor starts from the identity and overwrites a handful of
//! coefficients. They are the building blocks every composing operation in
//! [`crate::adjust`] multiplies into the accumulated matrix.

use super::matrix::{ColorMatrix, TRANSLATION_ROW};
use crate::color::LUMINANCE_WEIGHTS;

impl ColorMatrix {
    /// Per-channel scale on the diagonal
    pub fn scaling(red: f32, green: f32, blue: f32, opacity: f32) -> Self {
        let mut qm = Self::identity();
        qm.m[0][0] = red;
        qm.m[1][1] = green;
        qm.m[2][2] = blue;
        qm.m[3][3] = opacity;
        qm
    }

    /// Per-channel offset in the translation row, in units of 255
    pub fn translation(red: f32, green: f32, blue: f32, opacity: f32) -> Self {
        let mut qm = Self::identity();
        qm.m[TRANSLATION_ROW][0] = red;
        qm.m[TRANSLATION_ROW][1] = green;
        qm.m[TRANSLATION_ROW][2] = blue;
        qm.m[TRANSLATION_ROW][3] = opacity;
        qm
    }

    /// Plane rotation by `phi` degrees
    ///
    /// `x` and `y` are the channels spanning the plane; `m[y][x]` receives
    /// `sin(phi)` and `m[x][y]` receives `-sin(phi)`.
    pub fn rotation(phi: f32, x: usize, y: usize) -> Self {
        let (s, c) = phi.to_radians().sin_cos();
        let mut qm = Self::identity();
        qm.m[x][x] = c;
        qm.m[y][y] = c;
        qm.m[y][x] = s;
        qm.m[x][y] = -s;
        qm
    }

    /// Shear of channel `x` by channels `y1` and `y2`
    ///
    /// The output of `x` becomes `x + d1 * y1 + d2 * y2`.
    pub fn shear(x: usize, y1: usize, d1: f32, y2: usize, d2: f32) -> Self {
        let mut qm = Self::identity();
        qm.m[y1][x] = d1;
        qm.m[y2][x] = d2;
        qm
    }

    /// Saturation blend against the weighted luminance
    ///
    /// 1.0 gives the identity, 0.0 maps every color channel to luminance.
    /// Alpha and translation are untouched.
    pub fn saturation(saturation: f32) -> Self {
        let complement = 1.0 - saturation;
        let mut qm = Self::identity();
        for (y, weight) in LUMINANCE_WEIGHTS.iter().enumerate() {
            let row_value = weight * complement;
            for x in 0..3 {
                qm.m[y][x] = row_value;
            }
            qm.m[y][y] += saturation;
        }
        qm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_scaling_layout() {
        let s = ColorMatrix::scaling(2.0, 3.0, 4.0, 0.5);
        assert_eq!(s[0][0], 2.0);
        assert_eq!(s[1][1], 3.0);
        assert_eq!(s[2][2], 4.0);
        assert_eq!(s[3][3], 0.5);
        assert_eq!(s[4][4], 1.0);
        assert_eq!(s[TRANSLATION_ROW][0], 0.0);
    }

    #[test]
    fn test_translation_layout() {
        let t = ColorMatrix::translation(0.1, 0.2, 0.3, 0.4);
        assert_eq!(t[TRANSLATION_ROW][..4], [0.1, 0.2, 0.3, 0.4]);
        let mut off_diag = t;
        off_diag[TRANSLATION_ROW] = [0.0, 0.0, 0.0, 0.0, 1.0];
        assert!(off_diag.is_identity(0.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        // (x, y) = (1, 0): green rotates into red
        let r = ColorMatrix::rotation(90.0, 1, 0);
        let mut v = [100.0, 0.0, 0.0, 255.0];
        r.transform_vector(&mut v);
        assert!(v[0].abs() < 1e-3);
        assert!((v[1] - 100.0).abs() < 1e-3);
        assert!(v[2].abs() < 1e-3);
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        assert!(ColorMatrix::rotation(0.0, 2, 1).is_identity(EPSILON));
    }

    #[test]
    fn test_shear() {
        let s = ColorMatrix::shear(2, 0, 0.5, 1, 0.25);
        let mut v = [100.0, 40.0, 10.0, 255.0];
        s.transform_vector(&mut v);
        assert!((v[0] - 100.0).abs() < EPSILON);
        assert!((v[1] - 40.0).abs() < EPSILON);
        assert!((v[2] - 70.0).abs() < EPSILON);
    }

    #[test]
    fn test_saturation_bounds() {
        assert!(ColorMatrix::saturation(1.0).is_identity(EPSILON));

        let grey = ColorMatrix::saturation(0.0);
        let mut v = [200.0, 100.0, 50.0, 255.0];
        grey.transform_vector(&mut v);
        let expected = 0.3086 * 200.0 + 0.6094 * 100.0 + 0.0820 * 50.0;
        for value in &v[..3] {
            assert!((value - expected).abs() < 1e-3);
        }
        assert_eq!(v[3], 255.0);
    }
}
