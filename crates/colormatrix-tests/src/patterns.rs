//! Test pattern generation
//!
//! Pixel sets used across the property and parity tests.

use colormatrix_core::Pixel;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Greys from black to white
    GreyRamp,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Random opaque pixels with seed
    Random(u64),
    /// Random pixels with random alpha
    RandomAlpha(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors on the cube surface
    GamutBoundary,
    /// All zeros with opaque alpha
    Black,
    /// All 255
    White,
}

impl TestPattern {
    /// Patterns whose pixels are all achromatic
    pub fn is_grey(&self) -> bool {
        matches!(self, Self::GreyRamp | Self::Black | Self::White)
    }
}

/// Generate `count` pixels of the given pattern
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<Pixel> {
    match pattern {
        TestPattern::GreyRamp => (0..count)
            .map(|i| {
                let v = ramp(i, count);
                Pixel::new(v, v, v)
            })
            .collect(),
        TestPattern::ColorCube => {
            let corners: [[f32; 3]; 8] = [
                [0.0, 0.0, 0.0],
                [255.0, 0.0, 0.0],
                [0.0, 255.0, 0.0],
                [0.0, 0.0, 255.0],
                [255.0, 255.0, 0.0],
                [255.0, 0.0, 255.0],
                [0.0, 255.0, 255.0],
                [255.0, 255.0, 255.0],
            ];
            cycle(&corners, count)
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f32 / count.max(1) as f32) * 360.0;
                let [r, g, b] = hsl_to_rgb(hue, 1.0, 0.5);
                Pixel::new(r, g, b)
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Pixel::new(
                        rng.gen_range(0.0..=255.0),
                        rng.gen_range(0.0..=255.0),
                        rng.gen_range(0.0..=255.0),
                    )
                })
                .collect()
        }
        TestPattern::RandomAlpha(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Pixel::with_alpha(
                        rng.gen_range(0.0..=255.0),
                        rng.gen_range(0.0..=255.0),
                        rng.gen_range(0.0..=255.0),
                        rng.gen_range(0.0..=255.0),
                    )
                })
                .collect()
        }
        TestPattern::SkinTones => {
            let tones: [[f32; 3]; 6] = [
                [255.0, 224.0, 189.0],
                [241.0, 194.0, 125.0],
                [224.0, 172.0, 105.0],
                [198.0, 134.0, 66.0],
                [141.0, 85.0, 36.0],
                [89.0, 47.0, 42.0],
            ];
            cycle(&tones, count)
        }
        TestPattern::GamutBoundary => {
            let colors: [[f32; 3]; 8] = [
                [255.0, 0.0, 0.0],
                [0.0, 255.0, 0.0],
                [0.0, 0.0, 255.0],
                [255.0, 255.0, 0.0],
                [255.0, 0.0, 255.0],
                [0.0, 255.0, 255.0],
                [255.0, 128.0, 0.0],
                [128.0, 0.0, 255.0],
            ];
            cycle(&colors, count)
        }
        TestPattern::Black => vec![Pixel::BLACK; count],
        TestPattern::White => vec![Pixel::WHITE; count],
    }
}

fn ramp(i: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    (i as f32 / (count - 1) as f32) * 255.0
}

fn cycle(colors: &[[f32; 3]], count: usize) -> Vec<Pixel> {
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|&[r, g, b]| Pixel::new(r, g, b))
        .collect()
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

/// Standard batch sizes
pub mod sizes {
    pub const TINY: usize = 8;
    pub const SMALL: usize = 256;
    pub const MEDIUM: usize = 4096;
    pub const LARGE: usize = 1 << 16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_black() {
        let data = generate_pattern(TestPattern::Black, 4);
        assert!(data.iter().all(|p| *p == Pixel::BLACK));
    }

    #[test]
    fn test_grey_ramp_endpoints() {
        let data = generate_pattern(TestPattern::GreyRamp, 256);
        assert_eq!(data[0], Pixel::BLACK);
        assert_eq!(data[255], Pixel::WHITE);
        assert!(data.iter().all(|p| p.r == p.g && p.g == p.b));
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_pattern(TestPattern::Random(42), 100);
        let b = generate_pattern(TestPattern::Random(42), 100);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.is_in_range()));
    }

    #[test]
    fn test_hue_ramp_is_saturated() {
        let data = generate_pattern(TestPattern::HueRamp, 36);
        for p in &data {
            let max = p.r.max(p.g).max(p.b);
            let min = p.r.min(p.g).min(p.b);
            assert!((max - 255.0).abs() < 1e-3 && min.abs() < 1e-3, "{:?}", p);
        }
    }
}
