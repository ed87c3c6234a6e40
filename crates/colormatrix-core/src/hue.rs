//! Hue rotation basis
//!
//! Hue rotation turns colors around the grey diagonal R = G = B while
//! keeping luminance fixed. No single elementary matrix does that, so the
//! rotation is performed in a changed basis:
//!
//! 1. `pre` rotates the grey vector onto the blue axis (red by 45°, then
//!    green by `-γ`), then shears the blue plane so that luminance ends up
//!    along blue as well.
//! 2. A plain blue-axis rotation performs the actual hue shift.
//! 3. `post`, the inverse of `pre`, rotates back.
//!
//! The shear factors depend on where the luminance vector lands after the
//! two rotations, so the pair is derived at runtime and cached.
//!
//! # Green rotation angle
//!
//! `γ` is the angle whose sine is 1/√3 and cosine √(2/3). Three values are
//! provided:
//!
//! - [`GREEN_ROTATION_EXACT`] (≈ 35.264390°) satisfies that definition and
//!   maps grey exactly onto blue. This is the default.
//! - [`GREEN_ROTATION_PUBLISHED`] (39.182655°) is the figure printed beside
//!   the definition in the write-up this technique comes from. It leaves a
//!   visible grey drift and is only useful for reproducing matrices from
//!   tools that used it.
//! - [`GREEN_ROTATION_EMPIRICAL`] (35°) is the hand-tuned alternative the
//!   same write-up recommended after observing that drift.

use std::sync::OnceLock;

use tracing::debug;

use crate::color::{LUM_B, LUM_G, LUM_R};
use crate::math::ColorMatrix;
use crate::types::MatrixOrder;

/// asin(1/√3) in degrees
pub const GREEN_ROTATION_EXACT: f32 = 35.264_39;

/// Historical green rotation figure
pub const GREEN_ROTATION_PUBLISHED: f32 = 39.182_655;

/// Hand-tuned green rotation
pub const GREEN_ROTATION_EMPIRICAL: f32 = 35.0;

/// Red rotation that moves the grey vector into the red/blue plane
const RED_ROTATION: f32 = 45.0;

static SHARED: OnceLock<HueBasis> = OnceLock::new();

/// Change-of-basis pair used by hue rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBasis {
    pre: ColorMatrix,
    post: ColorMatrix,
    green_rotation: f32,
    shear: [f32; 2],
}

impl HueBasis {
    /// Build the basis for a given green rotation angle in degrees
    pub fn new(green_rotation: f32) -> Self {
        let mut pre = ColorMatrix::identity();
        pre.rotate_red(RED_ROTATION, MatrixOrder::Prepend);
        pre.rotate_green(-green_rotation, MatrixOrder::Append);

        // Where luminance lands decides how far to shear the blue plane.
        let mut lum = [LUM_R, LUM_G, LUM_B, 1.0];
        pre.transform_vector(&mut lum);
        let red = lum[0] / lum[2];
        let green = lum[1] / lum[2];

        pre.shear_blue(red, green, MatrixOrder::Append);

        let mut post = ColorMatrix::identity();
        post.shear_blue(-red, -green, MatrixOrder::Prepend);
        post.rotate_green(green_rotation, MatrixOrder::Append);
        post.rotate_red(-RED_ROTATION, MatrixOrder::Append);

        debug!(green_rotation, red, green, "built hue basis");

        Self {
            pre,
            post,
            green_rotation,
            shear: [red, green],
        }
    }

    /// The process-wide basis built from [`GREEN_ROTATION_EXACT`]
    ///
    /// Built on first use; every caller, on any thread, gets the same fully
    /// constructed instance. Use `HueBasis::new(GREEN_ROTATION_PUBLISHED)`
    /// to match matrices built with the older angle.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(|| Self::new(GREEN_ROTATION_EXACT))
    }

    /// Matrix taking the grey axis onto the blue axis
    pub fn pre(&self) -> &ColorMatrix {
        &self.pre
    }

    /// Inverse of [`pre`](Self::pre)
    pub fn post(&self) -> &ColorMatrix {
        &self.post
    }

    /// Green rotation angle this basis was built with, in degrees
    pub fn green_rotation(&self) -> f32 {
        self.green_rotation
    }

    /// Blue-plane shear factors `[red, green]`
    pub fn shear_factors(&self) -> [f32; 2] {
        self.shear
    }

    /// Full hue rotation matrix `pre × rotate_blue(phi) × post`
    pub fn rotation(&self, phi: f32) -> ColorMatrix {
        let mut m = self.pre;
        m.rotate_blue(phi, MatrixOrder::Append);
        m.multiply(&self.post, MatrixOrder::Append);
        m
    }
}

impl Default for HueBasis {
    fn default() -> Self {
        *Self::shared()
    }
}
