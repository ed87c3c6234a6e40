//! # colormatrix-tests
//!
//! Cross-checking harness for colormatrix.
//!
//! This crate provides:
//! - Deterministic pixel patterns for property tests
//! - An `f64` reference implementation of the matrix algebra
//! - Accuracy statistics comparing transformed pixel sets
//!
//! ## Test Categories
//!
//! 1. **Properties**: identity, order sensitivity, saturation, clamping
//! 2. **Hue rotation**: grey fixed point, periodicity, luminance
//! 3. **Reference parity**: `f32` core against the `f64` reference
//! 4. **Interop**: raw grid layout, flat buffers, serde

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelStats, compare_pixels};
pub use patterns::{TestPattern, generate_pattern};
pub use reference::RefMatrix;
