//! 5x5 color matrix
//!
//! The matrix acts on homogeneous row vectors `(R, G, B, A, w)`, so a color
//! is multiplied from the left: `out = v × M`. Row 4 holds the translation
//! offsets and the top-left 4x4 block is the linear part. This is the same
//! positional layout as the GDI+ `ColorMatrix` struct, so [`ColorMatrix::m`]
//! can be handed to such consumers as-is.
//!
//! The homogeneous coordinate is 255 rather than 1, which puts translation
//! offsets in units of a full channel range: an offset of `0.5` adds 127.5.

use std::ops::{Index, IndexMut, Mul};

use crate::color::Pixel;
use crate::color::pixel::CHANNEL_MAX;
use crate::types::MatrixOrder;
use crate::{Error, Result};

/// Number of rows and columns
pub const DIM: usize = 5;

/// Row holding the translation offsets
pub const TRANSLATION_ROW: usize = 4;

/// A 5x5 affine color transform
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorMatrix {
    /// Matrix elements in row-major order
    pub m: [[f32; DIM]; DIM],
}

impl ColorMatrix {
    /// Create an identity matrix
    #[inline]
    pub const fn new() -> Self {
        Self::identity()
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        let mut m = [[0.0; DIM]; DIM];
        let mut i = 0;
        while i < DIM {
            m[i][i] = 1.0;
            i += 1;
        }
        Self { m }
    }

    /// Create a matrix from row-major elements
    #[inline]
    pub const fn from_rows(m: [[f32; DIM]; DIM]) -> Self {
        Self { m }
    }

    /// Create a matrix from 25 row-major values
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let flat: [f32; DIM * DIM] = values.try_into().map_err(|_| Error::BufferSize {
            expected: DIM * DIM,
            actual: values.len(),
        })?;
        Ok(Self {
            m: bytemuck::cast(flat),
        })
    }

    /// Reset to the identity matrix
    pub fn reset(&mut self) {
        self.m = [[0.0; DIM]; DIM];
        for i in 0..DIM {
            self.m[i][i] = 1.0;
        }
    }

    /// Overwrite all coefficients with those of `other`
    #[inline]
    pub fn copy_from(&mut self, other: &Self) {
        self.m = other.m;
    }

    /// Borrow the coefficient grid
    #[inline]
    pub fn as_array(&self) -> &[[f32; DIM]; DIM] {
        &self.m
    }

    /// Mutably borrow the coefficient grid
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [[f32; DIM]; DIM] {
        &mut self.m
    }

    /// View the grid as 25 contiguous row-major values
    #[inline]
    pub fn as_flat(&self) -> &[f32; DIM * DIM] {
        bytemuck::cast_ref(&self.m)
    }

    /// Mutable view of the grid as 25 contiguous row-major values
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [f32; DIM * DIM] {
        bytemuck::cast_mut(&mut self.m)
    }

    /// Returns a × b
    pub fn product(a: &Self, b: &Self) -> Self {
        let mut result = [[0.0f32; DIM]; DIM];
        for (y, row) in result.iter_mut().enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                let mut t = 0.0;
                for i in 0..DIM {
                    t += a.m[y][i] * b.m[i][x];
                }
                *out = t;
            }
        }
        Self { m: result }
    }

    /// Compose this matrix with `other`
    ///
    /// With [`MatrixOrder::Prepend`] the result is `other × self`, so `other`
    /// acts on colors before the accumulated transform. With
    /// [`MatrixOrder::Append`] the result is `self × other`.
    pub fn multiply(&mut self, other: &Self, order: MatrixOrder) -> &mut Self {
        self.m = match order {
            MatrixOrder::Prepend => Self::product(other, self),
            MatrixOrder::Append => Self::product(self, other),
        }
        .m;
        self
    }

    /// Like [`multiply`](Self::multiply), doing nothing when `other` is `None`
    pub fn multiply_opt(&mut self, other: Option<&Self>, order: MatrixOrder) -> &mut Self {
        if let Some(other) = other {
            self.multiply(other, order);
        }
        self
    }

    /// Transform an `[r, g, b, a]` vector in place
    ///
    /// `out[x] = 255 * m[4][x] + Σ v[y] * m[y][x]`. No clamping.
    #[inline]
    pub fn transform_vector(&self, v: &mut [f32; 4]) {
        let mut temp = [0.0f32; 4];
        for (x, out) in temp.iter_mut().enumerate() {
            *out = CHANNEL_MAX * self.m[TRANSLATION_ROW][x];
            for (y, value) in v.iter().enumerate() {
                *out += value * self.m[y][x];
            }
        }
        *v = temp;
    }

    /// Like [`transform_vector`](Self::transform_vector), doing nothing when
    /// `v` is `None`
    pub fn transform_vector_opt(&self, v: Option<&mut [f32; 4]>) {
        if let Some(v) = v {
            self.transform_vector(v);
        }
    }

    /// Transform one pixel and clamp it to [0, 255]
    #[inline]
    pub fn transform_pixel(&self, pixel: &mut Pixel) {
        self.transform_vector(pixel.as_array_mut());
        pixel.normalize();
    }

    /// Transform a copy of `pixel`, clamped to [0, 255]
    #[inline]
    pub fn transformed(&self, mut pixel: Pixel) -> Pixel {
        self.transform_pixel(&mut pixel);
        pixel
    }

    /// Transform every pixel in order, clamping each result to [0, 255]
    pub fn transform_colors(&self, pixels: &mut [Pixel]) {
        for pixel in pixels.iter_mut() {
            self.transform_pixel(pixel);
        }
    }

    /// Transform the first `count` pixels
    ///
    /// Fails if `count` exceeds the number of pixels available.
    pub fn transform_colors_count(&self, pixels: &mut [Pixel], count: usize) -> Result<()> {
        let actual = pixels.len();
        let head = pixels
            .get_mut(..count)
            .ok_or(Error::BufferSize { expected: count, actual })?;
        self.transform_colors(head);
        Ok(())
    }

    /// Transpose this matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut t = [[0.0f32; DIM]; DIM];
        for (y, row) in self.m.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                t[x][y] = *value;
            }
        }
        Self { m: t }
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; DIM]; DIM]> for ColorMatrix {
    fn from(m: [[f32; DIM]; DIM]) -> Self {
        Self::from_rows(m)
    }
}

impl From<ColorMatrix> for [[f32; DIM]; DIM] {
    fn from(matrix: ColorMatrix) -> Self {
        matrix.m
    }
}

impl Index<usize> for ColorMatrix {
    type Output = [f32; DIM];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for ColorMatrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul for ColorMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::product(&self, &rhs)
    }
}

impl Mul<&ColorMatrix> for &ColorMatrix {
    type Output = ColorMatrix;

    fn mul(self, rhs: &ColorMatrix) -> Self::Output {
        ColorMatrix::product(self, rhs)
    }
}

impl Mul<Pixel> for ColorMatrix {
    type Output = Pixel;

    fn mul(self, rhs: Pixel) -> Self::Output {
        self.transformed(rhs)
    }
}
