//! CPU implementation of distribution operations.

use super::CpuDistributions;
use crate::error::Result;
use crate::generator::{check_generator, Generator};
use crate::kernels;
use crate::ops::DistributionOps;
use crate::tensor::{TensorMut, TensorRef};

/// DistributionOps implementation for the CPU kernels.
impl DistributionOps for CpuDistributions {
    fn random(&self, out: &mut TensorMut<'_>, gen: Option<&Generator>) -> Result<()> {
        kernels::random(out, check_generator(gen))
    }

    fn random_from_to(
        &self,
        out: &mut TensorMut<'_>,
        range: u64,
        base: i64,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::random_from_to(out, range, base, check_generator(gen))
    }

    fn random_full_range(&self, out: &mut TensorMut<'_>, gen: Option<&Generator>) -> Result<()> {
        kernels::random_full_range(out, check_generator(gen))
    }

    fn random_between(
        &self,
        out: &mut TensorMut<'_>,
        from: i64,
        to: Option<i64>,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::random_between(out, from, to, check_generator(gen))
    }

    fn uniform(
        &self,
        out: &mut TensorMut<'_>,
        from: f64,
        to: f64,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::uniform(out, from, to, check_generator(gen))
    }

    fn normal(
        &self,
        out: &mut TensorMut<'_>,
        mean: f64,
        std: f64,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::normal(out, mean, std, check_generator(gen))
    }

    fn cauchy(
        &self,
        out: &mut TensorMut<'_>,
        median: f64,
        sigma: f64,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::cauchy(out, median, sigma, check_generator(gen))
    }

    fn log_normal(
        &self,
        out: &mut TensorMut<'_>,
        mean: f64,
        std: f64,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::log_normal(out, mean, std, check_generator(gen))
    }

    fn exponential(
        &self,
        out: &mut TensorMut<'_>,
        lambda: f64,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::exponential(out, lambda, check_generator(gen))
    }

    fn geometric(&self, out: &mut TensorMut<'_>, p: f64, gen: Option<&Generator>) -> Result<()> {
        kernels::geometric(out, p, check_generator(gen))
    }

    fn bernoulli(&self, out: &mut TensorMut<'_>, p: f64, gen: Option<&Generator>) -> Result<()> {
        kernels::bernoulli_scalar(out, p, check_generator(gen))
    }

    fn bernoulli_tensor(
        &self,
        out: &mut TensorMut<'_>,
        p: &TensorRef<'_>,
        gen: Option<&Generator>,
    ) -> Result<()> {
        kernels::bernoulli_tensor(out, p, check_generator(gen))
    }
}
