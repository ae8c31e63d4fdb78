//! Scalar kernels for uniform, Cauchy, log-normal, geometric and exponential

use super::{check_floating, check_supported, serial_fill, GEOMETRIC_DTYPES};
use crate::distributions::{Cauchy, Exponential, Geometric, LogNormal, Sampler, UniformReal};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::tensor::{TensorMut, TypedMut};
use num_traits::Float;

/// Fill `out` uniformly over `[from, to)` at the dtype's precision
///
/// # Errors
/// - `InvalidDType` if `out` is not floating point
/// - `InvalidParameter` if a bound is outside the dtype's finite range,
///   `from > to`, or `to - from` overflows the dtype
pub fn uniform(out: &mut TensorMut<'_>, from: f64, to: f64, gen: &Generator) -> Result<()> {
    check_floating(out.dtype(), "uniform")?;
    crate::dispatch_float_dtype!(out.dtype(), T => {
        uniform_typed::<T>(&mut out.typed()?, from, to, gen)
    }, "uniform")
}

/// [`uniform`] over a typed view
pub fn uniform_typed<T: Element + Float>(
    out: &mut TypedMut<'_, T>,
    from: f64,
    to: f64,
    gen: &Generator,
) -> Result<()> {
    let max = Element::to_f64(<T as Float>::max_value());
    let min = Element::to_f64(<T as Float>::min_value());
    for (arg, value) in [("from", from), ("to", to)] {
        if !(min..=max).contains(&value) {
            return Err(Error::invalid_parameter(
                arg,
                format!("{arg} is out of bounds [{min}, {max}] for {}", T::DTYPE),
            ));
        }
    }
    if from > to {
        return Err(Error::invalid_parameter(
            "from",
            format!("uniform expects to return a [from, to) range, but found from={from} > to={to}"),
        ));
    }
    if to - from > max {
        return Err(Error::invalid_parameter(
            "to",
            format!("uniform expects to-from <= {max}, but found to={to} and from={from}"),
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = UniformReal::<T>::new(from, to);
    serial_fill(out, gen, |g| dist.sample(g));
    Ok(())
}

/// Fill `out` with samples from `Cauchy(median, sigma)`
pub fn cauchy(out: &mut TensorMut<'_>, median: f64, sigma: f64, gen: &Generator) -> Result<()> {
    check_floating(out.dtype(), "cauchy")?;
    crate::dispatch_float_dtype!(out.dtype(), T => {
        cauchy_typed::<T>(&mut out.typed()?, median, sigma, gen)
    }, "cauchy")
}

/// [`cauchy`] over a typed view
pub fn cauchy_typed<T: Element + Float>(
    out: &mut TypedMut<'_, T>,
    median: f64,
    sigma: f64,
    gen: &Generator,
) -> Result<()> {
    if !(sigma > 0.0) {
        return Err(Error::invalid_parameter(
            "sigma",
            format!("cauchy expects sigma > 0.0, but found sigma={sigma}"),
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = Cauchy::new(median, sigma);
    serial_fill(out, gen, |g| T::from_f64(dist.sample(g)));
    Ok(())
}

/// Fill `out` with samples from `LogNormal(mean, std)`
///
/// `mean` and `std` are the parameters of the underlying normal.
pub fn log_normal(out: &mut TensorMut<'_>, mean: f64, std: f64, gen: &Generator) -> Result<()> {
    check_floating(out.dtype(), "log_normal")?;
    crate::dispatch_float_dtype!(out.dtype(), T => {
        log_normal_typed::<T>(&mut out.typed()?, mean, std, gen)
    }, "log_normal")
}

/// [`log_normal`] over a typed view
pub fn log_normal_typed<T: Element + Float>(
    out: &mut TypedMut<'_, T>,
    mean: f64,
    std: f64,
    gen: &Generator,
) -> Result<()> {
    if !(std > 0.0) {
        return Err(Error::invalid_parameter(
            "std",
            format!("log_normal expects std > 0.0, but found std={std}"),
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = LogNormal::new(mean, std);
    serial_fill(out, gen, |g| T::from_f64(dist.sample(g)));
    Ok(())
}

/// Fill `out` with the number of trials up to the first success
///
/// Integer outputs are allowed; the sample is cast (saturating) to the dtype.
pub fn geometric(out: &mut TensorMut<'_>, p: f64, gen: &Generator) -> Result<()> {
    check_supported(out.dtype(), GEOMETRIC_DTYPES, "geometric")?;
    crate::dispatch_dtype!(out.dtype(), T => {
        geometric_typed::<T>(&mut out.typed()?, p, gen)
    }, "geometric")
}

/// [`geometric`] over a typed view
pub fn geometric_typed<T: Element>(out: &mut TypedMut<'_, T>, p: f64, gen: &Generator) -> Result<()> {
    check_supported(T::DTYPE, GEOMETRIC_DTYPES, "geometric")?;
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::invalid_parameter(
            "p",
            format!("geometric expects p to be in (0, 1), but got p={p}"),
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = Geometric::new(p);
    serial_fill(out, gen, |g| T::from_f64(dist.sample(g)));
    Ok(())
}

/// Fill `out` with samples from `Exponential(lambda)`
pub fn exponential(out: &mut TensorMut<'_>, lambda: f64, gen: &Generator) -> Result<()> {
    check_floating(out.dtype(), "exponential")?;
    crate::dispatch_float_dtype!(out.dtype(), T => {
        exponential_typed::<T>(&mut out.typed()?, lambda, gen)
    }, "exponential")
}

/// [`exponential`] over a typed view
pub fn exponential_typed<T: Element + Float>(
    out: &mut TypedMut<'_, T>,
    lambda: f64,
    gen: &Generator,
) -> Result<()> {
    if !(lambda > 0.0 && lambda.is_finite()) {
        return Err(Error::invalid_parameter(
            "lambda",
            format!("exponential expects lambda > 0.0, but found lambda={lambda}"),
        ));
    }
    if out.numel() == 0 {
        return Ok(());
    }
    let dist = Exponential::new(lambda);
    serial_fill(out, gen, |g| T::from_f64(dist.sample(g)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;

    fn fill_f64(n: usize, f: impl FnOnce(&mut TensorMut<'_>) -> Result<()>) -> Vec<f64> {
        let mut data = vec![f64::NAN; n];
        {
            let mut view = TensorMut::from_slice(&mut data, &[n]).unwrap();
            f(&mut view).unwrap();
        }
        data
    }

    #[test]
    fn test_uniform_range() {
        let gen = Generator::new(1);
        let data = fill_f64(1000, |v| uniform(v, -1.0, 4.0, &gen));
        assert!(data.iter().all(|v| (-1.0..4.0).contains(v)));
    }

    #[test]
    fn test_uniform_parameter_checks() {
        let gen = Generator::new(1);
        let mut data = vec![0.0f32; 4];
        let mut view = TensorMut::from_slice(&mut data, &[4]).unwrap();
        assert!(matches!(
            uniform(&mut view, 2.0, 1.0, &gen),
            Err(Error::InvalidParameter { arg: "from", .. })
        ));
        assert!(matches!(
            uniform(&mut view, 0.0, 1e300, &gen),
            Err(Error::InvalidParameter { arg: "to", .. })
        ));
        assert!(matches!(
            uniform(&mut view, -3e38, 3e38, &gen),
            Err(Error::InvalidParameter { arg: "to", .. })
        ));
        assert!(matches!(
            uniform(&mut view, f64::NAN, 1.0, &gen),
            Err(Error::InvalidParameter { arg: "from", .. })
        ));
    }

    #[test]
    fn test_exponential_rejects_ints() {
        let gen = Generator::new(1);
        let mut data = vec![0i64; 4];
        let mut view = TensorMut::from_slice(&mut data, &[4]).unwrap();
        assert!(matches!(
            exponential(&mut view, 1.0, &gen),
            Err(Error::InvalidDType { dtype: DType::I64, .. })
        ));
    }

    #[test]
    fn test_continuous_reject_ints() {
        let gen = Generator::new(1);
        let mut data = vec![0i32; 4];
        let mut view = TensorMut::from_slice(&mut data, &[4]).unwrap();
        assert!(matches!(cauchy(&mut view, 0.0, 1.0, &gen), Err(Error::InvalidDType { .. })));
        assert!(matches!(log_normal(&mut view, 0.0, 1.0, &gen), Err(Error::InvalidDType { .. })));
        assert!(matches!(uniform(&mut view, 0.0, 1.0, &gen), Err(Error::InvalidDType { .. })));
    }

    #[test]
    fn test_parameter_domains() {
        let gen = Generator::new(1);
        let mut data = vec![0.0f64; 4];
        let mut view = TensorMut::from_slice(&mut data, &[4]).unwrap();
        assert!(cauchy(&mut view, 0.0, 0.0, &gen).is_err());
        assert!(log_normal(&mut view, 0.0, -1.0, &gen).is_err());
        assert!(log_normal(&mut view, 0.0, 0.0, &gen).is_err());
        assert!(geometric(&mut view, 0.0, &gen).is_err());
        assert!(geometric(&mut view, 1.0, &gen).is_err());
        assert!(exponential(&mut view, 0.0, &gen).is_err());
        assert!(exponential(&mut view, f64::INFINITY, &gen).is_err());
    }

    #[test]
    fn test_geometric_integer_output() {
        let gen = Generator::new(3);
        let mut data = vec![0i32; 500];
        {
            let mut view = TensorMut::from_slice(&mut data, &[500]).unwrap();
            geometric(&mut view, 0.4, &gen).unwrap();
        }
        assert!(data.iter().all(|&v| v >= 1));

        let mut bools = vec![crate::dtype::Bool::FALSE; 2];
        let mut view = TensorMut::from_slice(&mut bools, &[2]).unwrap();
        assert!(matches!(
            geometric(&mut view, 0.4, &gen),
            Err(Error::UnsupportedDType { dtype: DType::Bool, .. })
        ));
    }

    #[test]
    fn test_typed_entry_points() {
        let mut data = vec![0.0f32; 64];
        {
            let mut view = TensorMut::from_slice(&mut data, &[64]).unwrap();
            let mut typed = view.typed::<f32>().unwrap();
            exponential_typed(&mut typed, 3.0, &Generator::new(2)).unwrap();
            assert!(matches!(
                cauchy_typed(&mut typed, 0.0, -1.0, &Generator::new(2)),
                Err(Error::InvalidParameter { arg: "sigma", .. })
            ));
        }
        assert!(data.iter().all(|&v| v >= 0.0));

        let reference = fill_f64(64, |v| uniform(v, 1.0, 2.0, &Generator::new(6)));
        let mut typed_out = vec![0.0f64; 64];
        {
            let mut view = TensorMut::from_slice(&mut typed_out, &[64]).unwrap();
            uniform_typed(&mut view.typed::<f64>().unwrap(), 1.0, 2.0, &Generator::new(6)).unwrap();
        }
        assert_eq!(typed_out, reference);

        let mut bools = vec![crate::dtype::Bool::FALSE; 2];
        let mut view = TensorMut::from_slice(&mut bools, &[2]).unwrap();
        let mut typed = view.typed::<crate::dtype::Bool>().unwrap();
        assert!(matches!(
            geometric_typed(&mut typed, 0.5, &Generator::new(2)),
            Err(Error::UnsupportedDType { .. })
        ));
    }

    #[test]
    fn test_supports() {
        let gen = Generator::new(5);
        let exp = fill_f64(500, |v| exponential(v, 2.0, &gen));
        assert!(exp.iter().all(|&v| v >= 0.0));
        let ln = fill_f64(500, |v| log_normal(v, 0.0, 1.0, &gen));
        assert!(ln.iter().all(|&v| v > 0.0));
        let c = fill_f64(500, |v| cauchy(v, 1.0, 0.5, &gen));
        assert!(c.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_empty_view_leaves_generator_untouched() {
        let gen = Generator::new(7);
        let mut data: Vec<f32> = Vec::new();
        {
            let mut view = TensorMut::from_slice(&mut data, &[0]).unwrap();
            exponential(&mut view, 1.0, &gen).unwrap();
        }
        let reference = Generator::new(7);
        assert_eq!(gen.lock().random(), reference.lock().random());
    }
}
