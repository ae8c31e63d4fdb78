//! AVX2 mathematical function implementations
//!
//! Vectorized single-precision `log`, `sin` and `cos` over 256-bit registers.
//! Algorithms and coefficients are documented in `common.rs`.
//!
//! | Function | f32 | Error          |
//! |----------|-----|----------------|
//! | log      | ✓   | < 1e-6 (abs)   |
//! | sin      | ✓   | < 1e-6 (abs)   |
//! | cos      | ✓   | < 1e-6 (abs)   |
//!
//! # Safety
//!
//! All functions require AVX2 and FMA CPU features.

use std::arch::x86_64::*;

use super::common::{log_coefficients, trig_coefficients};

// ============================================================================
// Natural logarithm: log(x)
// ============================================================================

/// Fast SIMD log approximation for f32 using AVX2+FMA
///
/// See `common::_LOG_ALGORITHM_DOC` for algorithm details.
///
/// # Safety
/// Requires AVX2 and FMA CPU features.
#[target_feature(enable = "avx2", enable = "fma")]
#[inline]
pub unsafe fn log_f32(x: __m256) -> __m256 {
    use log_coefficients::*;

    let one = _mm256_set1_ps(1.0);
    let ln2 = _mm256_set1_ps(std::f32::consts::LN_2);
    let sqrt2 = _mm256_set1_ps(std::f32::consts::SQRT_2);
    let half = _mm256_set1_ps(0.5);

    // Exponent: reinterpret as int, shift right by 23, subtract bias
    let x_bits = _mm256_castps_si256(x);
    let exp_raw = _mm256_srli_epi32::<23>(x_bits);
    let exp_unbiased = _mm256_sub_epi32(exp_raw, _mm256_set1_epi32(EXP_BIAS_F32));
    let mut n = _mm256_cvtepi32_ps(exp_unbiased);

    // Mantissa with exponent forced to zero, so m is in [1, 2)
    let mantissa_mask = _mm256_set1_epi32(MANTISSA_MASK_F32);
    let exp_zero = _mm256_set1_epi32(EXP_ZERO_F32);
    let m_bits = _mm256_or_si256(_mm256_and_si256(x_bits, mantissa_mask), exp_zero);
    let mut m = _mm256_castsi256_ps(m_bits);

    // Keep f = m - 1 in [-0.2929, 0.4142]
    let need_adjust = _mm256_cmp_ps::<_CMP_GT_OQ>(m, sqrt2);
    m = _mm256_blendv_ps(m, _mm256_mul_ps(m, half), need_adjust);
    n = _mm256_blendv_ps(n, _mm256_add_ps(n, one), need_adjust);

    // s = f / (2 + f) with f = m - 1
    let f = _mm256_sub_ps(m, one);
    let s = _mm256_div_ps(f, _mm256_add_ps(f, _mm256_set1_ps(2.0)));
    let s2 = _mm256_mul_ps(s, s);

    // Horner in s²: (((l9*s² + l7)*s² + l5)*s² + l3)*s² + l1, times s
    let mut poly = _mm256_set1_ps(L9_F32);
    poly = _mm256_fmadd_ps(poly, s2, _mm256_set1_ps(L7_F32));
    poly = _mm256_fmadd_ps(poly, s2, _mm256_set1_ps(L5_F32));
    poly = _mm256_fmadd_ps(poly, s2, _mm256_set1_ps(L3_F32));
    poly = _mm256_fmadd_ps(poly, s2, _mm256_set1_ps(L1_F32));
    poly = _mm256_mul_ps(poly, s);

    _mm256_fmadd_ps(n, ln2, poly)
}

// ============================================================================
// Trigonometric functions: sin, cos
// ============================================================================

/// Fast SIMD sin approximation for f32 using AVX2+FMA
///
/// See `common::_TRIG_ALGORITHM_DOC` for algorithm details.
///
/// # Safety
/// Requires AVX2 and FMA CPU features.
#[target_feature(enable = "avx2", enable = "fma")]
#[inline]
pub unsafe fn sin_f32(x: __m256) -> __m256 {
    use trig_coefficients::*;

    let two_over_pi = _mm256_set1_ps(std::f32::consts::FRAC_2_PI);
    let pi_over_2 = _mm256_set1_ps(std::f32::consts::FRAC_PI_2);

    // j = round(x * 2/π), y = x - j * π/2
    let j = _mm256_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(_mm256_mul_ps(
        x,
        two_over_pi,
    ));
    let j_int = _mm256_cvtps_epi32(j);
    let y = _mm256_fnmadd_ps(j, pi_over_2, x);

    let y2 = _mm256_mul_ps(y, y);
    let y3 = _mm256_mul_ps(y2, y);
    let y4 = _mm256_mul_ps(y2, y2);
    let y5 = _mm256_mul_ps(y4, y);
    let y6 = _mm256_mul_ps(y4, y2);
    let y7 = _mm256_mul_ps(y4, y3);
    let y8 = _mm256_mul_ps(y4, y4);

    let sin_y = _mm256_fmadd_ps(
        _mm256_set1_ps(S7_F32),
        y7,
        _mm256_fmadd_ps(
            _mm256_set1_ps(S5_F32),
            y5,
            _mm256_fmadd_ps(_mm256_set1_ps(S3_F32), y3, _mm256_mul_ps(_mm256_set1_ps(S1_F32), y)),
        ),
    );
    let cos_y = _mm256_fmadd_ps(
        _mm256_set1_ps(C8_F32),
        y8,
        _mm256_fmadd_ps(
            _mm256_set1_ps(C6_F32),
            y6,
            _mm256_fmadd_ps(
                _mm256_set1_ps(C4_F32),
                y4,
                _mm256_fmadd_ps(_mm256_set1_ps(C2_F32), y2, _mm256_set1_ps(C0_F32)),
            ),
        ),
    );

    // cos(y) when j is odd, negate when j mod 4 is 2 or 3
    let j_mod_4 = _mm256_and_si256(j_int, _mm256_set1_epi32(3));
    let use_cos_mask = _mm256_castsi256_ps(_mm256_cmpeq_epi32(
        _mm256_and_si256(j_mod_4, _mm256_set1_epi32(1)),
        _mm256_set1_epi32(1),
    ));
    let negate_mask = _mm256_castsi256_ps(_mm256_cmpeq_epi32(
        _mm256_and_si256(j_mod_4, _mm256_set1_epi32(2)),
        _mm256_set1_epi32(2),
    ));
    let sign_bit = _mm256_set1_ps(-0.0);

    let result = _mm256_blendv_ps(sin_y, cos_y, use_cos_mask);
    let negated = _mm256_xor_ps(result, sign_bit);
    _mm256_blendv_ps(result, negated, negate_mask)
}

/// Fast SIMD cos approximation for f32 using AVX2+FMA
///
/// Implemented as: cos(x) = sin(x + π/2)
///
/// # Safety
/// Requires AVX2 and FMA CPU features.
#[target_feature(enable = "avx2", enable = "fma")]
#[inline]
pub unsafe fn cos_f32(x: __m256) -> __m256 {
    let pi_over_2 = _mm256_set1_ps(std::f32::consts::FRAC_PI_2);
    sin_f32(_mm256_add_ps(x, pi_over_2))
}
