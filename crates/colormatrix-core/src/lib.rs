//! # colormatrix - composable color matrices
//!
//! A 5x5 affine color matrix for RGBA pixels, in the layout used by GDI+
//! `ColorMatrix` and similar compositing APIs.
//!
//! Build a matrix by composing operations (scale, translate, rotate, shear,
//! saturation, hue), then apply it to pixels in one multiply-add pass.
//!
//! ## Order
//!
//! Every operation takes a [`MatrixOrder`]. `Prepend` (the default) makes
//! the new operation act on colors *before* everything composed so far;
//! `Append` makes it act *after*. Swapping them changes the result whenever
//! the operations do not commute.
//!
//! ## Quick Start
//!
//! ```
//! use colormatrix_core::{ColorMatrix, MatrixOrder, Pixel};
//!
//! let mut qm = ColorMatrix::new();
//! qm.rotate_hue(30.0)
//!     .set_saturation(1.2, MatrixOrder::Append)
//!     .translate_colors(0.05, MatrixOrder::Append);
//!
//! let mut pixels = [Pixel::new(200.0, 100.0, 50.0), Pixel::new(128.0, 128.0, 128.0)];
//! qm.transform_colors(&mut pixels);
//!
//! // Raw grid for host graphics APIs: row 4 is the translation row
//! let grid: &[[f32; 5]; 5] = qm.as_array();
//! assert!((grid[4][0] - 0.05).abs() < 1e-6);
//! ```
//!
//! ## Features
//!
//! - `parallel`: rayon-backed [`simd::transform_pixels_par`]
//! - `serde`: `Serialize`/`Deserialize` for the public value types

pub mod adjust;
pub mod color;
pub mod error;
pub mod hue;
pub mod math;
pub mod simd;
pub mod types;

pub use color::{LUMINANCE_WEIGHTS, Pixel};
pub use error::{Error, Result};
pub use hue::{GREEN_ROTATION_EMPIRICAL, GREEN_ROTATION_EXACT, GREEN_ROTATION_PUBLISHED, HueBasis};
pub use math::ColorMatrix;
pub use types::{Channel, MatrixOrder};

/// Version of colormatrix
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
