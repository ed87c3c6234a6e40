//! Pixel type and luminance weights
//!
//! This module provides:
//! - [`Pixel`], the four-channel transform target
//! - The RGB luminance weights shared by saturation and hue operations

pub mod pixel;

pub use pixel::Pixel;

/// Red luminance weight
pub const LUM_R: f32 = 0.3086;
/// Green luminance weight
pub const LUM_G: f32 = 0.6094;
/// Blue luminance weight
pub const LUM_B: f32 = 0.0820;

/// Luminance weights for linear RGB, as `[r, g, b]`
///
/// Preferred over the television weights (0.30, 0.59, 0.11) for color
/// matrix work; the three values sum to 1.
pub const LUMINANCE_WEIGHTS: [f32; 3] = [LUM_R, LUM_G, LUM_B];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f32 = LUMINANCE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }
}
