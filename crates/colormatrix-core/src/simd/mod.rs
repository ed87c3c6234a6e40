//! SIMD-Optimized Batch Transforms
//!
//! Batch versions of the pixel transform, using the `multiversion` crate
//! for automatic CPU dispatch.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available. With the `parallel` feature,
//! [`transform_pixels_par`] spreads large batches over the rayon pool.

mod batch;

pub use batch::{transform_pixels, transform_rgba_f32};
#[cfg(feature = "parallel")]
pub use batch::{PARALLEL_CHUNK, transform_pixels_par};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
