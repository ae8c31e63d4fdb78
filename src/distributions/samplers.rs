//! Parameterized samplers drawing from a locked generator
//!
//! Each sampler is a small value holding validated parameters. `sample` takes
//! the already-locked [`CpuGenerator`], so a kernel locks once and then calls
//! the sampler per element.

use super::transformation;
use crate::dtype::{DType, Element};
use crate::generator::CpuGenerator;
use std::marker::PhantomData;

/// A distribution that can produce one sample per call
pub trait Sampler {
    /// Sample type, in the sampler's working precision
    type Output;

    /// Draw one sample
    fn sample(&self, gen: &mut CpuGenerator) -> Self::Output;
}

// ============================================================================
// Uniform family
// ============================================================================

/// Continuous uniform over `[from, to)` at `T`'s precision
///
/// f64 consumes a 64-bit draw; every other type a 32-bit draw.
#[derive(Debug, Clone, Copy)]
pub struct UniformReal<T> {
    from: f64,
    to: f64,
    _marker: PhantomData<T>,
}

impl<T: Element> UniformReal<T> {
    /// Uniform over `[from, to)`
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            _marker: PhantomData,
        }
    }
}

impl<T: Element> Sampler for UniformReal<T> {
    type Output = T;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> T {
        let val = if T::DTYPE == DType::F64 {
            gen.random64()
        } else {
            gen.random() as u64
        };
        transformation::uniform_real(val, self.from, self.to)
    }
}

/// Integer uniform over `[base, base + range)`
#[derive(Debug, Clone, Copy)]
pub struct UniformIntFromTo<T> {
    range: u64,
    base: i64,
    _marker: PhantomData<T>,
}

impl<T: Element> UniformIntFromTo<T> {
    /// `range` must be non-zero.
    pub fn new(range: u64, base: i64) -> Self {
        debug_assert!(range > 0);
        Self {
            range,
            base,
            _marker: PhantomData,
        }
    }
}

impl<T: Element> Sampler for UniformIntFromTo<T> {
    type Output = T;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> T {
        let val = if T::WIDE_RANGE && self.range >= 1u64 << 32 {
            gen.random64()
        } else {
            gen.random() as u64
        };
        transformation::uniform_int_from_to(val, self.range, self.base)
    }
}

/// Integer uniform over the whole of `[i64::MIN, i64::MAX]`
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformIntFullRange<T>(PhantomData<T>);

impl<T: Element> UniformIntFullRange<T> {
    /// Full 64-bit range sampler
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Element> Sampler for UniformIntFullRange<T> {
    type Output = T;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> T {
        transformation::uniform_int_full_range(gen.random64())
    }
}

/// Integer uniform over the natural range of `T`
///
/// i64 and f64 consume a 64-bit draw; every other type a 32-bit draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformInt<T>(PhantomData<T>);

impl<T: Element> UniformInt<T> {
    /// Natural-range sampler
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Element> Sampler for UniformInt<T> {
    type Output = T;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> T {
        let val = match T::DTYPE {
            DType::F64 | DType::I64 => gen.random64(),
            _ => gen.random() as u64,
        };
        transformation::uniform_int(val)
    }
}

// ============================================================================
// Continuous distributions (double precision)
// ============================================================================

#[inline]
fn uniform01(gen: &mut CpuGenerator) -> f64 {
    transformation::uniform_real::<f64>(gen.random64(), 0.0, 1.0)
}

/// Normal distribution, double-precision Box-Muller
///
/// Each transform yields two samples; the second is parked on the generator
/// (unscaled) and returned by the next normal draw from that generator.
#[derive(Debug, Clone, Copy)]
pub struct NormalDistribution {
    mean: f64,
    std: f64,
}

impl NormalDistribution {
    /// Normal with the given mean and standard deviation
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }
}

impl Sampler for NormalDistribution {
    type Output = f64;

    fn sample(&self, gen: &mut CpuGenerator) -> f64 {
        if let Some(cached) = gen.take_next_double_normal_sample() {
            return cached * self.std + self.mean;
        }
        let u1 = uniform01(gen);
        let u2 = uniform01(gen);
        let (z0, z1) = transformation::box_muller(u1, u2);
        gen.set_next_double_normal_sample(z1);
        z0 * self.std + self.mean
    }
}

/// Cauchy distribution
#[derive(Debug, Clone, Copy)]
pub struct Cauchy {
    median: f64,
    sigma: f64,
}

impl Cauchy {
    /// Cauchy with location `median` and scale `sigma`
    pub fn new(median: f64, sigma: f64) -> Self {
        Self { median, sigma }
    }
}

impl Sampler for Cauchy {
    type Output = f64;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> f64 {
        transformation::cauchy(uniform01(gen), self.median, self.sigma)
    }
}

/// Log-normal distribution: `exp` of a normal sample
#[derive(Debug, Clone, Copy)]
pub struct LogNormal {
    normal: NormalDistribution,
}

impl LogNormal {
    /// Log-normal whose logarithm is `Normal(mean, std)`
    pub fn new(mean: f64, std: f64) -> Self {
        Self {
            normal: NormalDistribution::new(mean, std),
        }
    }
}

impl Sampler for LogNormal {
    type Output = f64;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> f64 {
        self.normal.sample(gen).exp()
    }
}

/// Geometric distribution over `{1, 2, ...}`
#[derive(Debug, Clone, Copy)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Geometric with success probability `p`
    pub fn new(p: f64) -> Self {
        Self { p }
    }
}

impl Sampler for Geometric {
    type Output = f64;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> f64 {
        transformation::geometric(uniform01(gen), self.p)
    }
}

/// Exponential distribution with rate `lambda`
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Exponential with rate `lambda`
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }
}

impl Sampler for Exponential {
    type Output = f64;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> f64 {
        transformation::exponential(uniform01(gen), self.lambda)
    }
}

// ============================================================================
// Bernoulli
// ============================================================================

/// Precision a Bernoulli comparison is carried out in
///
/// f64 compares against a 53-bit uniform, f32 against a 24-bit uniform.
pub trait UniformPrecision: Copy + PartialOrd + Send + Sync + 'static {
    /// Uniform in `[0, 1)` at this precision
    fn uniform01(gen: &mut CpuGenerator) -> Self;
}

impl UniformPrecision for f64 {
    #[inline]
    fn uniform01(gen: &mut CpuGenerator) -> Self {
        UniformReal::<f64>::new(0.0, 1.0).sample(gen)
    }
}

impl UniformPrecision for f32 {
    #[inline]
    fn uniform01(gen: &mut CpuGenerator) -> Self {
        UniformReal::<f32>::new(0.0, 1.0).sample(gen)
    }
}

/// Bernoulli trial with success probability `p`
#[derive(Debug, Clone, Copy)]
pub struct BernoulliDistribution<P> {
    p: P,
}

impl<P: UniformPrecision> BernoulliDistribution<P> {
    /// Bernoulli with success probability `p`
    pub fn new(p: P) -> Self {
        Self { p }
    }
}

impl<P: UniformPrecision> Sampler for BernoulliDistribution<P> {
    type Output = bool;

    #[inline]
    fn sample(&self, gen: &mut CpuGenerator) -> bool {
        transformation::bernoulli(P::uniform01(gen), self.p)
    }
}
