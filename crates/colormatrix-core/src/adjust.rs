//! Composing color operations
//!
//! Every operation here builds an elementary matrix and multiplies it into
//! the receiver with the given [`MatrixOrder`]. Operations return
//! `&mut Self`, so adjustments chain:
//!
//! ```
//! use colormatrix_core::{ColorMatrix, Pixel};
//!
//! let mut qm = ColorMatrix::new();
//! qm.set_hue(45.0)
//!     .set_saturation2(0.9)
//!     .set_brightness(0.1);
//!
//! let mut pixel = Pixel::new(200.0, 100.0, 50.0);
//! qm.transform_pixel(&mut pixel);
//! assert!(pixel.is_in_range());
//! ```

use crate::hue::HueBasis;
use crate::math::ColorMatrix;
use crate::types::{Channel, MatrixOrder};

const RED: usize = Channel::Red.index();
const GREEN: usize = Channel::Green.index();
const BLUE: usize = Channel::Blue.index();

impl ColorMatrix {
    /// Scale each channel by its own factor
    pub fn scale(
        &mut self,
        red: f32,
        green: f32,
        blue: f32,
        opacity: f32,
        order: MatrixOrder,
    ) -> &mut Self {
        self.multiply(&Self::scaling(red, green, blue, opacity), order)
    }

    /// Scale the three color channels by the same factor, leaving opacity
    pub fn scale_colors(&mut self, scale: f32, order: MatrixOrder) -> &mut Self {
        self.scale(scale, scale, scale, 1.0, order)
    }

    /// Scale opacity only
    pub fn scale_opacity(&mut self, scale: f32, order: MatrixOrder) -> &mut Self {
        self.scale(1.0, 1.0, 1.0, scale, order)
    }

    /// Offset each channel, in units of 255
    pub fn translate(
        &mut self,
        red: f32,
        green: f32,
        blue: f32,
        opacity: f32,
        order: MatrixOrder,
    ) -> &mut Self {
        self.multiply(&Self::translation(red, green, blue, opacity), order)
    }

    /// Offset the three color channels by the same amount, leaving opacity
    pub fn translate_colors(&mut self, offset: f32, order: MatrixOrder) -> &mut Self {
        self.translate(offset, offset, offset, 0.0, order)
    }

    /// Offset opacity only
    pub fn translate_opacity(&mut self, offset: f32, order: MatrixOrder) -> &mut Self {
        self.translate(0.0, 0.0, 0.0, offset, order)
    }

    /// Rotate in the plane of channels `x` and `y` by `phi` degrees
    pub fn rotate_color(&mut self, phi: f32, x: usize, y: usize, order: MatrixOrder) -> &mut Self {
        self.multiply(&Self::rotation(phi, x, y), order)
    }

    /// Rotate around the red axis; red is unchanged
    pub fn rotate_red(&mut self, phi: f32, order: MatrixOrder) -> &mut Self {
        self.rotate_color(phi, BLUE, GREEN, order)
    }

    /// Rotate around the green axis; green is unchanged
    pub fn rotate_green(&mut self, phi: f32, order: MatrixOrder) -> &mut Self {
        self.rotate_color(phi, RED, BLUE, order)
    }

    /// Rotate around the blue axis; blue is unchanged
    pub fn rotate_blue(&mut self, phi: f32, order: MatrixOrder) -> &mut Self {
        self.rotate_color(phi, GREEN, RED, order)
    }

    /// Make channel `x` depend on channels `y1` and `y2`
    pub fn shear_color(
        &mut self,
        x: usize,
        y1: usize,
        d1: f32,
        y2: usize,
        d2: f32,
        order: MatrixOrder,
    ) -> &mut Self {
        self.multiply(&Self::shear(x, y1, d1, y2, d2), order)
    }

    /// Shear the red plane: `r += green * g + blue * b`
    pub fn shear_red(&mut self, green: f32, blue: f32, order: MatrixOrder) -> &mut Self {
        self.shear_color(RED, GREEN, green, BLUE, blue, order)
    }

    /// Shear the green plane: `g += red * r + blue * b`
    pub fn shear_green(&mut self, red: f32, blue: f32, order: MatrixOrder) -> &mut Self {
        self.shear_color(GREEN, RED, red, BLUE, blue, order)
    }

    /// Shear the blue plane: `b += red * r + green * g`
    pub fn shear_blue(&mut self, red: f32, green: f32, order: MatrixOrder) -> &mut Self {
        self.shear_color(BLUE, RED, red, GREEN, green, order)
    }

    /// Blend toward luminance; 0.0 is greyscale, 1.0 leaves colors alone
    pub fn set_saturation(&mut self, saturation: f32, order: MatrixOrder) -> &mut Self {
        self.multiply(&Self::saturation(saturation), order)
    }

    /// Rotate hue by `phi` degrees around the grey axis
    ///
    /// Greys stay fixed and luminance is approximately preserved. Always
    /// appends, using the shared [`HueBasis`] built from
    /// [`GREEN_ROTATION_EXACT`](crate::GREEN_ROTATION_EXACT).
    ///
    /// Matrices from tools using the older 39.182655° basis are not
    /// reproduced bit for bit. For those, build a basis from
    /// [`GREEN_ROTATION_PUBLISHED`](crate::GREEN_ROTATION_PUBLISHED) and
    /// pass it to [`rotate_hue_with`](Self::rotate_hue_with).
    pub fn rotate_hue(&mut self, phi: f32) -> &mut Self {
        self.rotate_hue_with(HueBasis::shared(), phi)
    }

    /// Rotate hue using a caller-supplied basis
    pub fn rotate_hue_with(&mut self, basis: &HueBasis, phi: f32) -> &mut Self {
        self.multiply(basis.pre(), MatrixOrder::Append)
            .rotate_blue(phi, MatrixOrder::Append)
            .multiply(basis.post(), MatrixOrder::Append)
    }

    /// Contrast as a uniform color scale, prepended
    pub fn set_contrast(&mut self, scale: f32) -> &mut Self {
        self.scale_colors(scale, MatrixOrder::Prepend)
    }

    /// Brightness as a uniform color offset, appended
    pub fn set_brightness(&mut self, offset: f32) -> &mut Self {
        self.translate_colors(offset, MatrixOrder::Append)
    }

    /// Saturation, appended
    pub fn set_saturation2(&mut self, saturation: f32) -> &mut Self {
        self.set_saturation(saturation, MatrixOrder::Append)
    }

    /// Alias for [`rotate_hue`](Self::rotate_hue)
    pub fn set_hue(&mut self, phi: f32) -> &mut Self {
        self.rotate_hue(phi)
    }
}
