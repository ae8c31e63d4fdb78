//! Normal distribution kernel
//!
//! Contiguous floating-point views of at least 16 elements take the batched
//! Box-Muller fill:
//!
//! 1. With the generator locked, draw one uniform per element straight into
//!    the output, plus 16 tail uniforms into a side buffer when the length is
//!    not a multiple of 16. Then release the lock.
//! 2. Transform each full 16-element chunk: elements `j` and `j + 8` become
//!    the cosine and sine branch of one Box-Muller pair.
//! 3. With a partial chunk left over, copy the tail uniforms over the last 16
//!    elements and transform them again. Up to 15 already-transformed values
//!    are replaced; fixed seeds depend on this.
//!
//! All draws of a call happen inside one lock scope and in the same order
//! as drawing the tail after the main transform, so the output for a given
//! generator state is independent of other threads. f32 uses AVX2+FMA for
//! step 2 when available.
//!
//! Small or strided views fall back to the double-precision sampler, which
//! shares its cached second sample through the generator.

use super::{check_floating, serial_fill};
use crate::distributions::{NormalDistribution, Sampler, UniformReal};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::tensor::TensorMut;
use num_traits::Float;

/// Batch size of the Box-Muller fill
const CHUNK: usize = 16;
const HALF: usize = CHUNK / 2;

/// Box-Muller over one 16-element chunk of uniforms in `[0, 1)`
///
/// `data[j]` supplies `u1` (as `1 - data[j]`) and `data[j + 8]` supplies
/// `u2` for `j` in `0..8`.
pub fn normal_fill_16<T: Element + Float>(data: &mut [T], mean: T, std: T) {
    debug_assert_eq!(data.len(), CHUNK);
    let minus_two = T::from_f64(-2.0);
    let two_pi = T::from_f64(std::f64::consts::TAU);

    for j in 0..HALF {
        let u1 = T::one() - data[j];
        let u2 = data[j + HALF];
        let radius = (minus_two * u1.ln()).sqrt();
        let theta = two_pi * u2;
        data[j] = radius * theta.cos() * std + mean;
        data[j + HALF] = radius * theta.sin() * std + mean;
    }
}

/// Draw the uniforms of one batched fill under a single lock
///
/// Returns the tail uniforms when `data.len()` is not a multiple of 16.
fn draw_uniforms<T: Element>(data: &mut [T], gen: &Generator) -> Option<[T; CHUNK]> {
    let uniform = UniformReal::<T>::new(0.0, 1.0);
    let mut state = gen.lock();
    for x in data.iter_mut() {
        *x = uniform.sample(&mut state);
    }
    if data.len() % CHUNK == 0 {
        return None;
    }
    let mut tail = [T::zeroed(); CHUNK];
    for x in tail.iter_mut() {
        *x = uniform.sample(&mut state);
    }
    Some(tail)
}

/// Batched fill with a caller-supplied chunk transform
fn batched_fill<T: Element>(data: &mut [T], gen: &Generator, transform: impl Fn(&mut [T])) {
    let size = data.len();
    debug_assert!(size >= CHUNK);

    let tail = draw_uniforms(data, gen);
    transform(&mut data[..size - size % CHUNK]);

    if let Some(tail) = tail {
        let last = &mut data[size - CHUNK..];
        last.copy_from_slice(&tail);
        transform(last);
    }
}

/// Batched normal fill of a contiguous buffer with the scalar transform
///
/// `data.len()` must be at least 16.
pub fn normal_fill<T: Element + Float>(data: &mut [T], mean: T, std: T, gen: &Generator) {
    batched_fill(data, gen, |chunks| {
        for chunk in chunks.chunks_exact_mut(CHUNK) {
            normal_fill_16(chunk, mean, std);
        }
    });
}

/// Batched normal fill of a contiguous f32 buffer, vectorized when possible
///
/// Draws exactly what [`normal_fill`] draws; only the transform differs.
/// `data.len()` must be at least 16.
pub fn normal_fill_f32(data: &mut [f32], mean: f32, std: f32, gen: &Generator) {
    batched_fill(data, gen, |chunks| transform_f32(chunks, mean, std));
}

fn transform_f32(chunks: &mut [f32], mean: f32, std: f32) {
    #[cfg(target_arch = "x86_64")]
    {
        if super::simd::detect_simd().has_avx2() {
            // SAFETY: AVX2 and FMA are available, and callers only pass whole chunks
            unsafe { super::simd::normal::normal_fill_avx2(chunks, mean, std) };
            return;
        }
    }

    for chunk in chunks.chunks_exact_mut(CHUNK) {
        normal_fill_16(chunk, mean, std);
    }
}

/// Fill `out` with samples from `Normal(mean, std)`
///
/// # Errors
/// - `InvalidDType` if `out` is not floating point
/// - `InvalidParameter` if `std` is negative or NaN
pub fn normal(out: &mut TensorMut<'_>, mean: f64, std: f64, gen: &Generator) -> Result<()> {
    check_floating(out.dtype(), "normal")?;
    if !(std >= 0.0) {
        return Err(Error::invalid_parameter(
            "std",
            format!("normal expects std >= 0.0, but found std {std}"),
        ));
    }
    let size = out.numel();
    if size == 0 {
        return Ok(());
    }

    if size >= CHUNK && out.is_contiguous() {
        if out.dtype() == DType::F32 {
            log::debug!("normal: batched f32 fill of {size} elements");
            let mut typed = out.typed::<f32>()?;
            if let Some(data) = typed.as_contiguous_mut() {
                normal_fill_f32(data, mean as f32, std as f32, gen);
                return Ok(());
            }
        } else {
            log::debug!("normal: batched {} fill of {size} elements", out.dtype());
            return crate::dispatch_float_dtype!(out.dtype(), T => {
                let mut typed = out.typed::<T>()?;
                if let Some(data) = typed.as_contiguous_mut() {
                    normal_fill::<T>(data, T::from_f64(mean), T::from_f64(std), gen);
                }
                Ok(())
            }, "normal");
        }
    }

    log::debug!("normal: per-element fill of {size} elements");
    let dist = NormalDistribution::new(mean, std);
    crate::dispatch_float_dtype!(out.dtype(), T => {
        serial_fill::<T>(&mut out.typed()?, gen, |g| T::from_f64(dist.sample(g)));
        Ok(())
    }, "normal")
}
