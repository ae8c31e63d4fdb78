//! Distribution fill operations.
//!
//! This module defines the `DistributionOps` trait for filling caller-owned
//! views with samples from probability distributions.

use crate::error::Result;
use crate::generator::Generator;
use crate::tensor::{TensorMut, TensorRef};

/// In-place distribution fills
///
/// Every method writes one sample per element of `out` and returns nothing.
/// `gen` selects the generator; `None` uses the process-wide
/// [`default_generator`](crate::generator::default_generator). Each call
/// holds the generator lock for all of its draws, so calls sharing a
/// generator never interleave.
///
/// Validation errors are raised before the generator is touched and before
/// `out` is written.
pub trait DistributionOps {
    // ===== Integer uniform =====

    /// Fill with values uniform over the natural range of the dtype
    ///
    /// Integers cover `[0, MAX]`, bool `{0, 1}`, floats `[0, 2^mantissa_digits]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDType` for u16, u32 and u64.
    fn random(&self, out: &mut TensorMut<'_>, gen: Option<&Generator>) -> Result<()>;

    /// Fill with integers uniform over `[base, base + range)`
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedDType` for u16, u32 and u64
    /// - `Error::InvalidParameter` if `range == 0`
    fn random_from_to(
        &self,
        out: &mut TensorMut<'_>,
        range: u64,
        base: i64,
        gen: Option<&Generator>,
    ) -> Result<()>;

    /// Fill with integers uniform over `[i64::MIN, i64::MAX]`
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDType` unless the dtype is i64, f64, f32 or bf16.
    fn random_full_range(&self, out: &mut TensorMut<'_>, gen: Option<&Generator>) -> Result<()>;

    /// Fill with integers uniform over `[from, to)`, or up to the dtype's
    /// maximum (inclusive) when `to` is `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use distfill::prelude::*;
    ///
    /// let mut dice = vec![0u8; 100];
    /// let mut view = TensorMut::from_slice(&mut dice, &[100])?;
    /// CpuDistributions.random_between(&mut view, 1, Some(7), None)?;
    /// assert!(dice.iter().all(|d| (1..=6).contains(d)));
    /// # Ok::<(), distfill::error::Error>(())
    /// ```
    fn random_between(
        &self,
        out: &mut TensorMut<'_>,
        from: i64,
        to: Option<i64>,
        gen: Option<&Generator>,
    ) -> Result<()>;

    // ===== Continuous distributions =====

    /// Fill with values uniform over `[from, to)`
    ///
    /// # Errors
    ///
    /// - `Error::InvalidDType` if `out` is not floating point
    /// - `Error::InvalidParameter` if `from > to` or a bound does not fit the dtype
    fn uniform(
        &self,
        out: &mut TensorMut<'_>,
        from: f64,
        to: f64,
        gen: Option<&Generator>,
    ) -> Result<()>;

    /// Fill with samples from `Normal(mean, std)`
    ///
    /// Contiguous f32 views of 16 or more elements use the vectorized
    /// Box-Muller fill.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidDType` if `out` is not floating point
    /// - `Error::InvalidParameter` if `std < 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use distfill::prelude::*;
    ///
    /// let gen = Generator::new(0);
    /// let mut data = vec![0.0f32; 64];
    /// let mut view = TensorMut::from_slice(&mut data, &[8, 8])?;
    /// CpuDistributions.normal(&mut view, 0.0, 1.0, Some(&gen))?;
    /// assert!(data.iter().all(|v| v.is_finite()));
    /// # Ok::<(), distfill::error::Error>(())
    /// ```
    fn normal(
        &self,
        out: &mut TensorMut<'_>,
        mean: f64,
        std: f64,
        gen: Option<&Generator>,
    ) -> Result<()>;

    /// Fill with samples from `Cauchy(median, sigma)`, `sigma > 0`
    fn cauchy(
        &self,
        out: &mut TensorMut<'_>,
        median: f64,
        sigma: f64,
        gen: Option<&Generator>,
    ) -> Result<()>;

    /// Fill with `exp` of samples from `Normal(mean, std)`, `std > 0`
    fn log_normal(
        &self,
        out: &mut TensorMut<'_>,
        mean: f64,
        std: f64,
        gen: Option<&Generator>,
    ) -> Result<()>;

    /// Fill with samples from `Exponential(lambda)`, `lambda > 0`
    fn exponential(&self, out: &mut TensorMut<'_>, lambda: f64, gen: Option<&Generator>)
        -> Result<()>;

    // ===== Discrete distributions =====

    /// Fill with the number of trials up to the first success, `0 < p < 1`
    ///
    /// Integer outputs other than u16, u32, u64 and bool are allowed.
    fn geometric(&self, out: &mut TensorMut<'_>, p: f64, gen: Option<&Generator>) -> Result<()>;

    /// Fill with Bernoulli(`p`) trials as 0/1 values, `p` in `[0, 1]`
    fn bernoulli(&self, out: &mut TensorMut<'_>, p: f64, gen: Option<&Generator>) -> Result<()>;

    /// Fill with one Bernoulli trial per element of the broadcast `p`
    ///
    /// f64 probabilities are compared in double precision, other floating
    /// dtypes in single precision.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidDType` if `p` is not floating point
    /// - `Error::BroadcastError` if `p` does not broadcast to `out`
    /// - `Error::InvalidParameter` if any probability is outside `[0, 1]`
    fn bernoulli_tensor(
        &self,
        out: &mut TensorMut<'_>,
        p: &TensorRef<'_>,
        gen: Option<&Generator>,
    ) -> Result<()>;
}
