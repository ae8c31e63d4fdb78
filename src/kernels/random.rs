//! Integer-uniform ("random") kernels

use super::{check_supported, serial_fill, FULL_RANGE_DTYPES, RANDOM_DTYPES};
use crate::distributions::{Sampler, UniformInt, UniformIntFromTo, UniformIntFullRange};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::tensor::{TensorMut, TypedMut};

/// Fill `out` uniformly over the natural integer range of its dtype
///
/// Integers cover `[0, MAX]`, bool covers `{false, true}`, floats cover
/// `[0, 2^mantissa_digits]`.
pub fn random(out: &mut TensorMut<'_>, gen: &Generator) -> Result<()> {
    check_supported(out.dtype(), RANDOM_DTYPES, "random")?;
    crate::dispatch_dtype!(out.dtype(), T => {
        random_typed::<T>(&mut out.typed()?, gen)
    }, "random")
}

/// [`random`] over a typed view
pub fn random_typed<T: Element>(out: &mut TypedMut<'_, T>, gen: &Generator) -> Result<()> {
    check_supported(T::DTYPE, RANDOM_DTYPES, "random")?;
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = UniformInt::<T>::new();
    serial_fill(out, gen, |g| dist.sample(g));
    Ok(())
}

/// Fill `out` uniformly over `[base, base + range)`
///
/// The sum is formed in wrapping 64-bit arithmetic and cast to the dtype.
/// Ranges of `2^32` or more consume 64-bit draws for i64, f64, f32 and bf16.
///
/// # Errors
/// - `UnsupportedDType` for u16, u32 and u64 outputs
/// - `InvalidParameter` if `range` is zero
pub fn random_from_to(out: &mut TensorMut<'_>, range: u64, base: i64, gen: &Generator) -> Result<()> {
    check_supported(out.dtype(), RANDOM_DTYPES, "random_from_to")?;
    crate::dispatch_dtype!(out.dtype(), T => {
        random_from_to_typed::<T>(&mut out.typed()?, range, base, gen)
    }, "random_from_to")
}

/// [`random_from_to`] over a typed view
pub fn random_from_to_typed<T: Element>(
    out: &mut TypedMut<'_, T>,
    range: u64,
    base: i64,
    gen: &Generator,
) -> Result<()> {
    check_supported(T::DTYPE, RANDOM_DTYPES, "random_from_to")?;
    if range == 0 {
        return Err(Error::invalid_parameter(
            "range",
            "random_from_to expects a non-empty range",
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = UniformIntFromTo::<T>::new(range, base);
    serial_fill(out, gen, |g| dist.sample(g));
    Ok(())
}

/// Fill `out` uniformly over `[i64::MIN, i64::MAX]`
///
/// Only defined for i64, f64, f32 and bf16 outputs.
pub fn random_full_range(out: &mut TensorMut<'_>, gen: &Generator) -> Result<()> {
    check_supported(out.dtype(), FULL_RANGE_DTYPES, "random_full_range")?;
    crate::dispatch_dtype!(out.dtype(), T => {
        random_full_range_typed::<T>(&mut out.typed()?, gen)
    }, "random_full_range")
}

/// [`random_full_range`] over a typed view
pub fn random_full_range_typed<T: Element>(out: &mut TypedMut<'_, T>, gen: &Generator) -> Result<()> {
    check_supported(T::DTYPE, FULL_RANGE_DTYPES, "random_full_range")?;
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = UniformIntFullRange::<T>::new();
    serial_fill(out, gen, |g| dist.sample(g));
    Ok(())
}

/// Fill `out` uniformly over `[from, to)`, or `[from, dtype max]` when `to` is
/// `None`
///
/// For floats the dtype max is `2^mantissa_digits`. With `to = None` and
/// `from = i64::MIN` the full 64-bit range kernel is used.
///
/// # Errors
/// - `UnsupportedDType` for u16, u32 and u64 outputs
/// - `InvalidParameter` if `from >= to` or either bound does not fit the dtype
pub fn random_between(
    out: &mut TensorMut<'_>,
    from: i64,
    to: Option<i64>,
    gen: &Generator,
) -> Result<()> {
    let dtype = out.dtype();
    check_supported(dtype, RANDOM_DTYPES, "random_between")?;

    let to_inc = match to {
        Some(to) => {
            if from >= to {
                return Err(Error::invalid_parameter(
                    "from",
                    format!("random_between expects 'from' to be less than 'to', but got from={from} >= to={to}"),
                ));
            }
            to - 1
        }
        None if from == i64::MIN => return random_full_range(out, gen),
        None => {
            let upper = dtype.int_upper_bound().min(i64::MAX as i128) as i64;
            if from > upper {
                return Err(Error::invalid_parameter(
                    "from",
                    format!("random_between expects 'from' to be at most {upper} for {dtype}, but got from={from}"),
                ));
            }
            upper
        }
    };

    let (lo, hi) = (dtype.int_lower_bound(), dtype.int_upper_bound());
    for (arg, value) in [("from", from), ("to", to_inc)] {
        if !(lo..=hi).contains(&(value as i128)) {
            return Err(Error::invalid_parameter(
                arg,
                format!("{arg} is out of bounds [{lo}, {hi}] for {dtype}"),
            ));
        }
    }

    let range = (to_inc as u64).wrapping_sub(from as u64).wrapping_add(1);
    random_from_to(out, range, from, gen)
}
