//! Accuracy comparison between pixel sets

use colormatrix_core::Pixel;
use palette::{FromColor, Hsv, Srgb};

/// Per-channel absolute error statistics
#[derive(Debug, Clone, Default)]
pub struct ChannelStats {
    pub mean: f32,
    pub max: f32,
    pub p95: f32,
    pub count: usize,
}

impl ChannelStats {
    /// Build statistics from a list of absolute differences
    pub fn from_values(values: &mut [f32]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = values.len();
        let mean = values.iter().sum::<f32>() / count as f32;
        let max = values[count - 1];
        let p95_idx = ((count as f32 * 0.95) as usize).min(count - 1);

        Self {
            mean,
            max,
            p95: values[p95_idx],
            count,
        }
    }

    /// Check that every difference stays within `tolerance`
    pub fn within(&self, tolerance: f32) -> bool {
        self.max <= tolerance
    }
}

/// Compare two pixel sets channel by channel, alpha included
///
/// Pairs are taken up to the shorter of the two slices.
pub fn compare_pixels(a: &[Pixel], b: &[Pixel]) -> ChannelStats {
    let mut diffs: Vec<f32> = a
        .iter()
        .zip(b)
        .flat_map(|(pa, pb)| {
            let (x, y) = (pa.to_array(), pb.to_array());
            [0, 1, 2, 3].map(|i| (x[i] - y[i]).abs())
        })
        .collect();
    ChannelStats::from_values(&mut diffs)
}

/// HSV saturation of a pixel, in [0, 1]
pub fn saturation_of(pixel: Pixel) -> f32 {
    let clamped = pixel.clamped();
    let rgb = Srgb::new(clamped.r / 255.0, clamped.g / 255.0, clamped.b / 255.0);
    let hsv: Hsv = Hsv::from_color(rgb);
    hsv.saturation
}

/// HSV hue of a pixel in degrees, in [0, 360)
pub fn hue_of(pixel: Pixel) -> f32 {
    let clamped = pixel.clamped();
    let rgb = Srgb::new(clamped.r / 255.0, clamped.g / 255.0, clamped.b / 255.0);
    let hsv: Hsv = Hsv::from_color(rgb);
    hsv.hue.into_positive_degrees()
}

/// Shortest angular distance between two hues in degrees
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
