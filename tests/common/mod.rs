//! Common test utilities
#![allow(dead_code)]

use distfill::generator::{Generator, Mt19937, RandomEngine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Sample mean and (population) standard deviation
pub fn mean_std(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let values: Vec<f64> = values.into_iter().collect();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Pearson chi-square statistic against a uniform expectation
pub fn chi_square_uniform(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum()
}

/// MT19937 engine that counts its 32-bit draws
pub struct CountingEngine {
    inner: Mt19937,
    draws: Arc<AtomicUsize>,
}

impl RandomEngine for CountingEngine {
    fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mt19937::from_seed(seed),
            draws: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.draws.fetch_add(1, Ordering::Relaxed);
        self.inner.next_u32()
    }

    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
    }

    fn name(&self) -> &'static str {
        "counting-mt19937"
    }
}

/// Generator whose 32-bit draws are counted in the returned counter
///
/// 64-bit draws count as two.
pub fn counting_generator(seed: u64) -> (Generator, Arc<AtomicUsize>) {
    let engine = CountingEngine::from_seed(seed);
    let draws = Arc::clone(&engine.draws);
    (Generator::from_engine(Box::new(engine), seed), draws)
}
