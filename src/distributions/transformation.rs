//! Pure transformations from raw random words or uniforms to samples
//!
//! Nothing here touches a generator. The samplers in
//! [`samplers`](super::samplers) draw the bits and hand them to these
//! functions, which keeps the math testable with fixed inputs.

use crate::dtype::Element;
use std::f64::consts::PI;

/// Map the low `T::RANDOM_BITS` bits of `val` onto `[from, to)`
///
/// The masked value is divided by `2^RANDOM_BITS`, so the uniform grid has exactly
/// as many points as `T` has mantissa bits.
#[inline]
pub fn uniform_real<T: Element>(val: u64, from: f64, to: f64) -> T {
    let mask = (1u64 << T::RANDOM_BITS) - 1;
    let divisor = 1.0 / (1u64 << T::RANDOM_BITS) as f64;
    let x = (val & mask) as f64 * divisor;
    T::from_f64(x * (to - from) + from)
}

/// Map `val` onto `[base, base + range)`
///
/// The sum is taken in wrapping 64-bit arithmetic and then cast to `T`.
/// `range` must be non-zero.
#[inline]
pub fn uniform_int_from_to<T: Element>(val: u64, range: u64, base: i64) -> T {
    T::from_i64(((val % range) as i64).wrapping_add(base))
}

/// Reinterpret a full 64-bit word as a sample over `[i64::MIN, i64::MAX]`
#[inline]
pub fn uniform_int_full_range<T: Element>(val: u64) -> T {
    T::from_i64(val as i64)
}

/// Map `val` onto the natural integer range of `T`
///
/// Integers cover `[0, MAX]`, bool covers `{0, 1}`, floats cover
/// `[0, 2^RANDOM_BITS]` (every integer the type represents exactly).
#[inline]
pub fn uniform_int<T: Element>(val: u64) -> T {
    let v = if T::DTYPE.is_float() {
        val % ((1u64 << T::RANDOM_BITS) + 1)
    } else if T::RANDOM_BITS >= 64 {
        val
    } else {
        val % (1u64 << T::RANDOM_BITS)
    };
    T::from_i64(v as i64)
}

/// Box-Muller pair from two uniforms in `[0, 1)`
///
/// Returns the `(cos, sin)` standard-normal pair; `u2` is mapped through
/// `ln(1 - u2)` so a zero draw stays finite.
#[inline]
pub fn box_muller(u1: f64, u2: f64) -> (f64, f64) {
    let r = (-2.0 * (-u2).ln_1p()).sqrt();
    let theta = 2.0 * PI * u1;
    (r * theta.cos(), r * theta.sin())
}

/// Cauchy sample from a uniform in `[0, 1)`
#[inline]
pub fn cauchy(val: f64, median: f64, sigma: f64) -> f64 {
    median + sigma * (PI * (val - 0.5)).tan()
}

/// Geometric sample (number of trials to first success) from a uniform
#[inline]
pub fn geometric(val: f64, p: f64) -> f64 {
    (val.ln() / (-p).ln_1p()).ceil()
}

/// Exponential sample from a uniform in `[0, 1)`
#[inline]
pub fn exponential(val: f64, lambda: f64) -> f64 {
    -1.0 / lambda * (-val).ln_1p()
}

/// Bernoulli outcome: `val < p`
#[inline]
pub fn bernoulli<P: PartialOrd>(val: P, p: P) -> bool {
    val < p
}
