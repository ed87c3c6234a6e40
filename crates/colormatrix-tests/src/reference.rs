//! Double-precision reference matrix
//!
//! An independent `f64` implementation of the composing operations, used
//! to bound the rounding error of the `f32` core. It builds the hue basis
//! from exact trigonometric values instead of a rounded angle constant.

use colormatrix_core::{ColorMatrix, MatrixOrder, Pixel};

const N: usize = 5;
const LUM: [f64; 3] = [0.3086, 0.6094, 0.0820];

/// A 5x5 color matrix in `f64`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefMatrix {
    pub m: [[f64; N]; N],
}

impl RefMatrix {
    pub fn identity() -> Self {
        let mut m = [[0.0; N]; N];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    pub fn product(a: &Self, b: &Self) -> Self {
        let mut m = [[0.0; N]; N];
        for (y, row) in m.iter_mut().enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                *out = (0..N).map(|i| a.m[y][i] * b.m[i][x]).sum();
            }
        }
        Self { m }
    }

    pub fn multiply(&mut self, other: &Self, order: MatrixOrder) -> &mut Self {
        *self = if order.is_append() {
            Self::product(self, other)
        } else {
            Self::product(other, self)
        };
        self
    }

    pub fn scale(&mut self, r: f64, g: f64, b: f64, a: f64, order: MatrixOrder) -> &mut Self {
        let mut s = Self::identity();
        for (i, v) in [r, g, b, a].into_iter().enumerate() {
            s.m[i][i] = v;
        }
        self.multiply(&s, order)
    }

    pub fn translate(&mut self, r: f64, g: f64, b: f64, a: f64, order: MatrixOrder) -> &mut Self {
        let mut t = Self::identity();
        t.m[4][..4].copy_from_slice(&[r, g, b, a]);
        self.multiply(&t, order)
    }

    /// Plane rotation; `x`/`y` follow the same channel pairs as the core
    pub fn rotate(&mut self, phi: f64, x: usize, y: usize, order: MatrixOrder) -> &mut Self {
        let (s, c) = phi.to_radians().sin_cos();
        self.rotate_sc(s, c, x, y, order)
    }

    fn rotate_sc(&mut self, s: f64, c: f64, x: usize, y: usize, order: MatrixOrder) -> &mut Self {
        let mut r = Self::identity();
        r.m[x][x] = c;
        r.m[y][y] = c;
        r.m[y][x] = s;
        r.m[x][y] = -s;
        self.multiply(&r, order)
    }

    pub fn shear(
        &mut self,
        x: usize,
        y1: usize,
        d1: f64,
        y2: usize,
        d2: f64,
        order: MatrixOrder,
    ) -> &mut Self {
        let mut h = Self::identity();
        h.m[y1][x] = d1;
        h.m[y2][x] = d2;
        self.multiply(&h, order)
    }

    pub fn saturation(&mut self, sat: f64, order: MatrixOrder) -> &mut Self {
        let mut s = Self::identity();
        for (y, w) in LUM.iter().enumerate() {
            for x in 0..3 {
                s.m[y][x] = w * (1.0 - sat) + if x == y { sat } else { 0.0 };
            }
        }
        self.multiply(&s, order)
    }

    /// Hue rotation with an exact `asin(1/√3)` basis
    pub fn rotate_hue(&mut self, phi: f64) -> &mut Self {
        // sin and cos of the green rotation, taken directly
        let gs = (1.0f64 / 3.0).sqrt();
        let gc = (2.0f64 / 3.0).sqrt();

        let mut pre = Self::identity();
        pre.rotate(45.0, 2, 1, MatrixOrder::Prepend);
        pre.rotate_sc(-gs, gc, 0, 2, MatrixOrder::Append);

        let mut lum = [LUM[0], LUM[1], LUM[2], 1.0];
        pre.apply(&mut lum);
        let red = lum[0] / lum[2];
        let green = lum[1] / lum[2];
        pre.shear(2, 0, red, 1, green, MatrixOrder::Append);

        let mut post = Self::identity();
        post.shear(2, 0, -red, 1, -green, MatrixOrder::Prepend);
        post.rotate_sc(gs, gc, 0, 2, MatrixOrder::Append);
        post.rotate(-45.0, 2, 1, MatrixOrder::Append);

        self.multiply(&pre, MatrixOrder::Append)
            .rotate(phi, 1, 0, MatrixOrder::Append)
            .multiply(&post, MatrixOrder::Append)
    }

    /// Unclamped transform of an `[r, g, b, a]` vector
    pub fn apply(&self, v: &mut [f64; 4]) {
        let mut out = [0.0; 4];
        for (x, o) in out.iter_mut().enumerate() {
            *o = 255.0 * self.m[4][x] + (0..4).map(|y| v[y] * self.m[y][x]).sum::<f64>();
        }
        *v = out;
    }

    /// Clamped transform of a pixel
    pub fn transform(&self, pixel: Pixel) -> Pixel {
        let mut v = pixel.to_array().map(f64::from);
        self.apply(&mut v);
        Pixel::from_array(v.map(|c| c.clamp(0.0, 255.0) as f32))
    }

    pub fn to_f32(&self) -> ColorMatrix {
        ColorMatrix::from_rows(self.m.map(|row| row.map(|v| v as f32)))
    }

    /// Largest absolute coefficient difference against an `f32` matrix
    pub fn max_diff(&self, other: &ColorMatrix) -> f64 {
        self.m
            .iter()
            .flatten()
            .zip(other.as_flat())
            .map(|(a, b)| (a - f64::from(*b)).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for RefMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&ColorMatrix> for RefMatrix {
    fn from(qm: &ColorMatrix) -> Self {
        Self {
            m: qm.m.map(|row| row.map(f64::from)),
        }
    }
}
