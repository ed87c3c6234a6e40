//! RGBA pixel
//!
//! Channels are `f32` in the nominal range 0-255. Values are left alone
//! until [`Pixel::normalize`] clamps them, so intermediate results may
//! overshoot in either direction.

use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use super::{LUM_B, LUM_G, LUM_R};
use crate::types::Channel;

/// Largest channel value
pub const CHANNEL_MAX: f32 = 255.0;

/// RGBA color with `f32` channels in storage order R, G, B, A
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Pixel {
    /// Red component (0 to 255)
    pub r: f32,
    /// Green component (0 to 255)
    pub g: f32,
    /// Blue component (0 to 255)
    pub b: f32,
    /// Alpha component (0 to 255, 255 is opaque)
    pub a: f32,
}

impl Pixel {
    /// Opaque black
    pub const BLACK: Self = Self::with_alpha(0.0, 0.0, 0.0, CHANNEL_MAX);

    /// Opaque white
    pub const WHITE: Self = Self::with_alpha(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::with_alpha(0.0, 0.0, 0.0, 0.0);

    /// Create an opaque pixel
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_alpha(r, g, b, CHANNEL_MAX)
    }

    /// Create a pixel with explicit alpha
    #[inline]
    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel from alpha-first arguments
    #[inline]
    pub const fn from_argb(a: f32, r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from an `[r, g, b, a]` array
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }

    /// Convert to an `[r, g, b, a]` array
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// View the channels as an array without copying
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Mutable view of the channels as an array
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// Create from 8-bit RGBA
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0] as f32,
            g: rgba[1] as f32,
            b: rgba[2] as f32,
            a: rgba[3] as f32,
        }
    }

    /// Convert to 8-bit RGBA, rounding and clamping each channel
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.to_array()
            .map(|v| v.round().clamp(0.0, CHANNEL_MAX) as u8)
    }

    /// Red channel
    pub fn r(&self) -> f32 {
        self.r
    }

    /// Green channel
    pub fn g(&self) -> f32 {
        self.g
    }

    /// Blue channel
    pub fn b(&self) -> f32 {
        self.b
    }

    /// Alpha channel
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Set the red channel
    pub fn set_r(&mut self, v: f32) {
        self.r = v;
    }

    /// Set the green channel
    pub fn set_g(&mut self, v: f32) {
        self.g = v;
    }

    /// Set the blue channel
    pub fn set_b(&mut self, v: f32) {
        self.b = v;
    }

    /// Set the alpha channel
    pub fn set_a(&mut self, v: f32) {
        self.a = v;
    }

    /// Clamp all channels to [0, 255] in place
    #[inline]
    pub fn normalize(&mut self) {
        for v in self.as_array_mut() {
            *v = (*v).clamp(0.0, CHANNEL_MAX);
        }
    }

    /// Copy with all channels clamped to [0, 255]
    #[inline]
    pub fn clamped(mut self) -> Self {
        self.normalize();
        self
    }

    /// Check if all channels are in [0, 255]
    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.as_array().iter().all(|v| (0.0..=CHANNEL_MAX).contains(v))
    }

    /// Weighted luminance of the color channels
    #[inline]
    pub fn luminance(&self) -> f32 {
        LUM_R * self.r + LUM_G * self.g + LUM_B * self.b
    }

    /// Check if approximately equal to another pixel
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Pixel {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Pixel> for [f32; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba8(rgba)
    }
}

impl Index<Channel> for Pixel {
    type Output = f32;

    fn index(&self, channel: Channel) -> &Self::Output {
        &self.as_array()[channel.index()]
    }
}

impl IndexMut<Channel> for Pixel {
    fn index_mut(&mut self, channel: Channel) -> &mut Self::Output {
        &mut self.as_array_mut()[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_is_opaque_black() {
        let p = Pixel::default();
        assert_eq!(p.to_array(), [0.0, 0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_argb_order() {
        let p = Pixel::from_argb(10.0, 20.0, 30.0, 40.0);
        assert_eq!(p.a(), 10.0);
        assert_eq!(p.r(), 20.0);
        assert_eq!(p.g(), 30.0);
        assert_eq!(p.b(), 40.0);
    }

    #[test]
    fn test_normalize() {
        let mut p = Pixel::with_alpha(300.0, -12.5, 128.0, 255.5);
        assert!(!p.is_in_range());
        p.normalize();
        assert_eq!(p.to_array(), [255.0, 0.0, 128.0, 255.0]);
        assert!(p.is_in_range());
    }

    #[test]
    fn test_rgba8_conversion() {
        let p = Pixel::from_rgba8([255, 128, 0, 64]);
        assert_eq!(p.to_rgba8(), [255, 128, 0, 64]);

        let over = Pixel::with_alpha(260.0, -3.0, 127.6, 0.4);
        assert_eq!(over.to_rgba8(), [255, 0, 128, 0]);
    }

    #[test]
    fn test_array_view_aliases_fields() {
        let mut p = Pixel::new(1.0, 2.0, 3.0);
        p.as_array_mut()[2] = 9.0;
        assert_eq!(p.b, 9.0);
        p[Channel::Alpha] = 17.0;
        assert_eq!(p.a(), 17.0);
        assert_eq!(p[Channel::Red], 1.0);
    }

    #[test]
    fn test_luminance() {
        assert!((Pixel::BLACK.luminance() - 0.0).abs() < EPSILON);
        assert!((Pixel::WHITE.luminance() - 255.0).abs() < 1e-3);

        let p = Pixel::new(200.0, 100.0, 50.0);
        assert!((p.luminance() - 126.76).abs() < 1e-3);
    }

    #[test]
    fn test_slice_cast() {
        let pixels = [Pixel::new(1.0, 2.0, 3.0), Pixel::TRANSPARENT];
        let flat: &[f32] = bytemuck::cast_slice(&pixels);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 255.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
