//! Matrix algebra for color transforms
//!
//! - [`ColorMatrix`]: the 5x5 grid, composition and pixel transform
//! - Elementary constructors (scaling, translation, rotation, shear,
//!   saturation) used by the composing operations

pub mod elementary;
pub mod matrix;

pub use matrix::{ColorMatrix, DIM, TRANSLATION_ROW};
