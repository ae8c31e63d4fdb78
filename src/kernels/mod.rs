//! Sampling kernels
//!
//! Every kernel follows the same protocol:
//!
//! 1. check the element type against the kernel's supported set
//! 2. validate the distribution parameters
//! 3. return early on an empty view
//! 4. dispatch on the dtype, lock the generator once and fill
//!
//! Steps 1-3 never touch the generator, so a rejected call leaves both the
//! output and the generator state untouched. The lock is a scoped
//! [`parking_lot::MutexGuard`] held for every draw of the call.
//!
//! The free functions here take a concrete [`Generator`]; the
//! [`DistributionOps`](crate::ops::DistributionOps) adapters resolve an
//! optional generator to the process default first.
//!
//! Each scalar kernel has two entry points: one over a runtime-typed
//! [`TensorMut`](crate::tensor::TensorMut), and a `*_typed` form over an already typed
//! [`TypedMut`](crate::tensor::TypedMut) for callers that dispatched on the
//! element type themselves. The typed form runs the same checks against
//! `T::DTYPE`.

mod bernoulli;
mod continuous;
mod normal;
mod random;
pub mod simd;

pub use bernoulli::{bernoulli_scalar, bernoulli_tensor};
pub use continuous::{
    cauchy, cauchy_typed, exponential, exponential_typed, geometric, geometric_typed, log_normal,
    log_normal_typed, uniform, uniform_typed,
};
pub use normal::{normal, normal_fill, normal_fill_16, normal_fill_f32};
pub use random::{
    random, random_between, random_from_to, random_from_to_typed, random_full_range,
    random_full_range_typed, random_typed,
};

use crate::dtype::{DType, DTypeSet, Element};
use crate::error::{Error, Result};
use crate::generator::{CpuGenerator, Generator};
use crate::tensor::TypedMut;

/// Output dtypes of the integer-uniform and Bernoulli kernels
pub const RANDOM_DTYPES: DTypeSet = DTypeSet::of(&[
    DType::U8,
    DType::I8,
    DType::I16,
    DType::I32,
    DType::I64,
    DType::F32,
    DType::F64,
    DType::Bool,
    DType::F16,
    DType::BF16,
]);

/// Output dtypes of the full 64-bit range fill
pub const FULL_RANGE_DTYPES: DTypeSet =
    DTypeSet::of(&[DType::I64, DType::F64, DType::F32, DType::BF16]);

/// Output dtypes of the geometric kernel
pub const GEOMETRIC_DTYPES: DTypeSet = DTypeSet::FLOATS
    .union(DTypeSet::SIGNED_INTS)
    .union(DTypeSet::single(DType::U8));

/// Reject dtypes outside `supported` with `UnsupportedDType`
#[inline]
pub(crate) fn check_supported(dtype: DType, supported: DTypeSet, op: &'static str) -> Result<()> {
    if supported.contains(dtype) {
        Ok(())
    } else {
        Err(Error::unsupported_dtype(dtype, op))
    }
}

/// Reject non-floating dtypes with `InvalidDType`
#[inline]
pub(crate) fn check_floating(dtype: DType, op: &'static str) -> Result<()> {
    if dtype.is_float() {
        Ok(())
    } else {
        Err(Error::invalid_dtype(
            dtype,
            op,
            format!("{op} is a continuous distribution, the output must have a floating point dtype"),
        ))
    }
}

/// Lock `gen` once and write `f(generator)` into every element of `out`
///
/// Contiguous views are filled front to back, strided views in storage order.
pub(crate) fn serial_fill<T: Element>(
    out: &mut TypedMut<'_, T>,
    gen: &Generator,
    mut f: impl FnMut(&mut CpuGenerator) -> T,
) {
    log::trace!("serial fill of {} {} elements", out.numel(), T::DTYPE);
    let mut state = gen.lock();
    out.fill_with(|| f(&mut state));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_sets() {
        for dtype in [DType::U16, DType::U32, DType::U64] {
            assert!(!RANDOM_DTYPES.contains(dtype));
            assert!(!GEOMETRIC_DTYPES.contains(dtype));
        }
        assert!(RANDOM_DTYPES.contains(DType::Bool));
        assert!(!GEOMETRIC_DTYPES.contains(DType::Bool));
        assert!(GEOMETRIC_DTYPES.contains(DType::U8));
        assert!(!FULL_RANGE_DTYPES.contains(DType::F16));
        assert!(FULL_RANGE_DTYPES.contains(DType::BF16));
    }

    #[test]
    fn test_check_floating() {
        assert!(check_floating(DType::F16, "normal").is_ok());
        assert!(matches!(
            check_floating(DType::I64, "exponential"),
            Err(Error::InvalidDType { op: "exponential", .. })
        ));
    }

    #[test]
    fn test_serial_fill_strided_order() {
        use crate::tensor::{Layout, TensorMut};

        // 2x2 transposed view: storage order visits offsets 0, 1, 2, 3
        let mut data = vec![0i32; 4];
        let gen = Generator::new(0);
        {
            let layout = Layout::new(&[2, 2], &[1, 2], 0);
            let mut view = TensorMut::from_strided(&mut data, layout).unwrap();
            let mut next = 0;
            serial_fill::<i32>(&mut view.typed().unwrap(), &gen, |_| {
                next += 1;
                next
            });
        }
        assert_eq!(data, vec![1, 2, 3, 4]);
    }
}
