//! SIMD detection and vectorized kernels
//!
//! ```text
//! simd/
//! ├── mod.rs      # This file: detection only
//! ├── math/       # Vectorized log / sin / cos
//! └── normal.rs   # 8-lane Box-Muller over 16-element chunks
//! ```
//!
//! | Architecture | Instruction Set | Vector Width | Used by     |
//! |--------------|-----------------|--------------|-------------|
//! | x86-64       | AVX2 + FMA      | 256 bits     | normal fill |
//! | Any          | Scalar          | N/A          | Fallback    |
//!
//! The Box-Muller batch pairs element `j` with element `j + 8` of a
//! 16-element chunk, which maps exactly onto two 8-lane f32 registers.
//! AVX-512 machines run the same 8-lane code.

pub(crate) mod math;

#[cfg(target_arch = "x86_64")]
pub(crate) mod normal;

use std::sync::OnceLock;

/// SIMD capability level detected at runtime
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    /// AVX2 with FMA support (256-bit vectors, 8 f32s)
    Avx2Fma = 1,
    /// Scalar fallback (no usable SIMD)
    Scalar = 0,
}

impl SimdLevel {
    /// Returns true if the AVX2+FMA kernels may run
    #[inline]
    pub const fn has_avx2(self) -> bool {
        matches!(self, Self::Avx2Fma)
    }

    /// Returns the name of this SIMD level as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avx2Fma => "AVX2+FMA",
            Self::Scalar => "Scalar",
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached SIMD level detection
static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// Detect the best available SIMD level for the current CPU
///
/// The first call performs detection; later calls return the cached result.
/// Always `Scalar` when the `simd` feature is disabled.
#[inline]
pub fn detect_simd() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(|| {
        let level = detect_simd_uncached();
        log::debug!("detected SIMD level: {level}");
        level
    })
}

/// Perform actual CPU feature detection (called once)
#[cold]
fn detect_simd_uncached() -> SimdLevel {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return SimdLevel::Avx2Fma;
        }
    }

    SimdLevel::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_cached() {
        assert_eq!(detect_simd(), detect_simd());
    }

    #[test]
    fn test_level_ordering() {
        assert!(SimdLevel::Avx2Fma > SimdLevel::Scalar);
        assert!(SimdLevel::Avx2Fma.has_avx2());
        assert!(!SimdLevel::Scalar.has_avx2());
        assert_eq!(SimdLevel::Avx2Fma.to_string(), "AVX2+FMA");
    }

    #[cfg(not(feature = "simd"))]
    #[test]
    fn test_scalar_without_feature() {
        assert_eq!(detect_simd(), SimdLevel::Scalar);
    }
}
