//! AVX2 Box-Muller over 16-element chunks
//!
//! Lanes `0..8` of a chunk hold the `u1` uniforms and lanes `8..16` the `u2`
//! uniforms. Both halves are overwritten: the first with the cosine branch,
//! the second with the sine branch.

use std::arch::x86_64::*;

use super::math::avx2::{cos_f32, log_f32, sin_f32};

/// Transform every 16-element chunk of `data` in place
///
/// # Safety
/// - Requires AVX2 and FMA CPU features.
/// - `data.len()` must be a multiple of 16.
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn normal_fill_avx2(data: &mut [f32], mean: f32, std: f32) {
    debug_assert_eq!(data.len() % 16, 0);

    let one = _mm256_set1_ps(1.0);
    let minus_two = _mm256_set1_ps(-2.0);
    let two_pi = _mm256_set1_ps(std::f32::consts::TAU);
    let mean_v = _mm256_set1_ps(mean);
    let std_v = _mm256_set1_ps(std);

    for chunk in data.chunks_exact_mut(16) {
        let ptr = chunk.as_mut_ptr();

        // [0, 1) -> (0, 1] so the log stays finite
        let u1 = _mm256_sub_ps(one, _mm256_loadu_ps(ptr));
        let u2 = _mm256_loadu_ps(ptr.add(8));

        let radius = _mm256_sqrt_ps(_mm256_mul_ps(minus_two, log_f32(u1)));
        let theta = _mm256_mul_ps(two_pi, u2);

        let z0 = _mm256_mul_ps(radius, cos_f32(theta));
        let z1 = _mm256_mul_ps(radius, sin_f32(theta));

        _mm256_storeu_ps(ptr, _mm256_fmadd_ps(z0, std_v, mean_v));
        _mm256_storeu_ps(ptr.add(8), _mm256_fmadd_ps(z1, std_v, mean_v));
    }
}
