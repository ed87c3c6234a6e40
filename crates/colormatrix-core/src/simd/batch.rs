//! SIMD-optimized batch pixel transforms
//!
//! These functions apply one matrix to many pixels. Results match
//! [`ColorMatrix::transform_colors`] exactly: the multiply-add sequence per
//! channel is the same and the output is clamped to [0, 255].

use multiversion::multiversion;
use tracing::trace;

use crate::color::Pixel;
use crate::color::pixel::CHANNEL_MAX;
use crate::math::{ColorMatrix, DIM, TRANSLATION_ROW};
use crate::{Error, Result};

/// Pixels handed to each rayon task by [`transform_pixels_par`]
#[cfg(feature = "parallel")]
pub const PARALLEL_CHUNK: usize = 16 * 1024;

/// Multiply-add and clamp a batch of RGBA vectors in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn transform_rgba_kernel(matrix: &[[f32; DIM]; DIM], data: &mut [[f32; 4]]) {
    // Translation is constant across the batch
    let offset = [
        CHANNEL_MAX * matrix[TRANSLATION_ROW][0],
        CHANNEL_MAX * matrix[TRANSLATION_ROW][1],
        CHANNEL_MAX * matrix[TRANSLATION_ROW][2],
        CHANNEL_MAX * matrix[TRANSLATION_ROW][3],
    ];

    for px in data.iter_mut() {
        let r = px[0];
        let g = px[1];
        let b = px[2];
        let a = px[3];

        for (x, out) in px.iter_mut().enumerate() {
            let mut t = offset[x];
            t += r * matrix[0][x];
            t += g * matrix[1][x];
            t += b * matrix[2][x];
            t += a * matrix[3][x];
            *out = t.clamp(0.0, CHANNEL_MAX);
        }
    }
}

/// Transform a batch of pixels in place, clamping to [0, 255]
pub fn transform_pixels(matrix: &ColorMatrix, pixels: &mut [Pixel]) {
    trace!(count = pixels.len(), simd = super::active_features(), "transform_pixels");
    transform_rgba_kernel(matrix.as_array(), bytemuck::cast_slice_mut(pixels));
}

/// Transform interleaved RGBA `f32` data in place, clamping to [0, 255]
///
/// Fails if the length is not a multiple of four; the error reports the
/// length of the whole pixels present.
pub fn transform_rgba_f32(matrix: &ColorMatrix, data: &mut [f32]) -> Result<()> {
    if data.len() % 4 != 0 {
        return Err(Error::BufferSize {
            expected: data.len() / 4 * 4,
            actual: data.len(),
        });
    }
    trace!(count = data.len() / 4, simd = super::active_features(), "transform_rgba_f32");
    transform_rgba_kernel(matrix.as_array(), bytemuck::cast_slice_mut(data));
    Ok(())
}

/// Parallel variant of [`transform_pixels`] for large batches
#[cfg(feature = "parallel")]
pub fn transform_pixels_par(matrix: &ColorMatrix, pixels: &mut [Pixel]) {
    use rayon::prelude::*;

    trace!(count = pixels.len(), "transform_pixels_par");
    let grid = matrix.as_array();
    pixels
        .par_chunks_mut(PARALLEL_CHUNK)
        .for_each(|chunk| transform_rgba_kernel(grid, bytemuck::cast_slice_mut(chunk)));
}
