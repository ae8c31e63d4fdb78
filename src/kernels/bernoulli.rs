//! Bernoulli kernels
//!
//! A scalar probability is compared in double precision. A probability
//! tensor is compared in double precision when it holds f64 and in single
//! precision (24-bit uniform, f32 comparison) for every other floating
//! dtype.

use super::{check_supported, serial_fill, RANDOM_DTYPES};
use crate::distributions::{BernoulliDistribution, Sampler};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::tensor::{TensorMut, TensorRef};

/// Fill `out` with independent Bernoulli(`p`) trials as 0/1 values
///
/// # Errors
/// - `UnsupportedDType` for u16, u32 and u64 outputs
/// - `InvalidParameter` if `p` is outside `[0, 1]`
pub fn bernoulli_scalar(out: &mut TensorMut<'_>, p: f64, gen: &Generator) -> Result<()> {
    check_supported(out.dtype(), RANDOM_DTYPES, "bernoulli")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_parameter(
            "p",
            format!("bernoulli expects p to be in [0, 1], but got p={p}"),
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = BernoulliDistribution::new(p);
    crate::dispatch_dtype!(out.dtype(), T => {
        serial_fill::<T>(&mut out.typed()?, gen, |g| T::from_i64(dist.sample(g) as i64));
        Ok(())
    }, "bernoulli")
}

/// Fill `out` with one Bernoulli trial per element of `p`
///
/// `p` is broadcast to `out`'s shape; element `i` of `out` is drawn with
/// probability `p[i]`.
///
/// # Errors
/// - `UnsupportedDType` for u16, u32 and u64 outputs
/// - `InvalidDType` if `p` is not floating point
/// - `BroadcastError` if `p` cannot be broadcast to `out`
/// - `InvalidParameter` if any probability is outside `[0, 1]`
pub fn bernoulli_tensor(out: &mut TensorMut<'_>, p: &TensorRef<'_>, gen: &Generator) -> Result<()> {
    check_supported(out.dtype(), RANDOM_DTYPES, "bernoulli")?;
    if !p.dtype().is_float() {
        return Err(Error::invalid_dtype(
            p.dtype(),
            "bernoulli",
            "expected probabilities tensor to have floating type",
        ));
    }
    let p = p.broadcast_to(out.shape())?;

    crate::dispatch_float_dtype!(p.dtype(), P => {
        let probs = p.typed::<P>()?;
        let bad = probs.iter().map(Element::to_f64).find(|v| !(0.0..=1.0).contains(v));
        if let Some(bad) = bad {
            return Err(Error::invalid_parameter(
                "p",
                format!("bernoulli expects all elements of p to be in [0, 1], but found {bad}"),
            ));
        }
    }, "bernoulli");

    if out.numel() == 0 {
        return Ok(());
    }
    log::trace!("bernoulli with {} probabilities into {}", p.dtype(), out.dtype());

    crate::dispatch_dtype!(out.dtype(), T => {
        let mut typed = out.typed::<T>()?;
        if p.dtype() == DType::F64 {
            let probs = p.typed::<f64>()?;
            let mut state = gen.lock();
            typed.zip_fill_with(&probs, |prob| {
                T::from_i64(BernoulliDistribution::new(prob).sample(&mut state) as i64)
            });
        } else {
            crate::dispatch_float_dtype!(p.dtype(), P => {
                let probs = p.typed::<P>()?;
                let mut state = gen.lock();
                typed.zip_fill_with(&probs, |prob| {
                    let prob = Element::to_f64(prob) as f32;
                    T::from_i64(BernoulliDistribution::new(prob).sample(&mut state) as i64)
                });
            }, "bernoulli");
        }
        Ok(())
    }, "bernoulli")
}
