//! DType dispatch utilities for the sampling kernels
//!
//! This module provides the `dispatch_dtype!` and `dispatch_float_dtype!`
//! macros, which turn a runtime `DType` into a concrete Rust type so that
//! each kernel body is written once and monomorphized per element type.
//!
//! # Usage
//!
//! ```ignore
//! fn my_kernel(out: &mut TensorMut<'_>) -> Result<()> {
//!     dispatch_dtype!(out.dtype(), T => {
//!         // T is now a concrete type (f32, i64, Bool, ...)
//!         out.typed::<T>()?.fill_with(|| T::zeroed());
//!         Ok(())
//!     }, "my_kernel")
//! }
//! ```
//!
//! Kernels check their supported `DTypeSet` before dispatching; the macros
//! themselves bind every dtype they know, so the body must compile for all of
//! them.
//!
//! ## Arguments
//!
//! * `$dtype` - Expression evaluating to a `DType` value
//! * `$T` - Identifier to bind to the concrete type in the body
//! * `$body` - Code block to execute with `T` bound
//! * `$error_op` - Operation name for error messages
//!
//! ## Supported Types
//!
//! - `F64` -> `f64`
//! - `F32` -> `f32`
//! - `F16` -> `half::f16` (requires "f16" feature)
//! - `BF16` -> `half::bf16` (requires "f16" feature)
//! - `I64` / `I32` / `I16` / `I8` -> `i64` / `i32` / `i16` / `i8`
//! - `U64` / `U32` / `U16` / `U8` -> `u64` / `u32` / `u16` / `u8`
//! - `Bool` -> `crate::dtype::Bool`

/// Internal helper macro to dispatch types requiring the "f16" feature.
/// Parameterized by type to avoid duplicating macro for F16 vs BF16.
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_f16_type {
    ($T:ident, $body:block, $dtype:expr, $type:ty) => {{
        #[cfg(feature = "f16")]
        {
            type $T = $type;
            $body
        }
        #[cfg(not(feature = "f16"))]
        {
            return Err($crate::error::Error::FeatureRequired {
                dtype: $dtype,
                feature: "f16",
            });
        }
    }};
}

/// Macro for runtime dtype dispatch to typed operations.
///
/// Binds `T` to the element type of every `DType`; F16/BF16 go through
/// [`dispatch_f16_type!`].
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::f16)
            }
            $crate::dtype::DType::BF16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::bf16)
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::I16 => {
                type $T = i16;
                $body
            }
            $crate::dtype::DType::I8 => {
                type $T = i8;
                $body
            }
            $crate::dtype::DType::U64 => {
                type $T = u64;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U16 => {
                type $T = u16;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            $crate::dtype::DType::Bool => {
                type $T = $crate::dtype::Bool;
                $body
            }
            #[allow(unreachable_patterns)]
            _ => {
                return Err($crate::error::Error::UnsupportedDType {
                    dtype: $dtype,
                    op: $error_op,
                })
            }
        }
    };
}

/// Dispatch over floating-point dtypes only.
///
/// Binds `T` to `f64`, `f32`, `half::f16` or `half::bf16`, so the body may
/// use `num_traits::Float`. Any other dtype returns `InvalidDType`.
#[macro_export]
macro_rules! dispatch_float_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::f16)
            }
            $crate::dtype::DType::BF16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::bf16)
            }
            other => {
                return Err($crate::error::Error::invalid_dtype(
                    other,
                    $error_op,
                    "expected a floating point element type",
                ))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::dtype::{DType, Element};
    use crate::error::{Error, Result};

    fn dtype_of(dtype: DType) -> Result<DType> {
        dispatch_dtype!(dtype, T => { Ok(<T as Element>::DTYPE) }, "dtype_of")
    }

    fn float_size(dtype: DType) -> Result<usize> {
        dispatch_float_dtype!(dtype, T => { Ok(std::mem::size_of::<T>()) }, "float_size")
    }

    #[test]
    fn test_dispatch_binds_matching_type() {
        for dtype in [
            DType::F64,
            DType::F32,
            DType::I64,
            DType::I32,
            DType::I16,
            DType::I8,
            DType::U64,
            DType::U32,
            DType::U16,
            DType::U8,
            DType::Bool,
        ] {
            assert_eq!(dtype_of(dtype).unwrap(), dtype);
        }
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_dispatch_half_types() {
        assert_eq!(dtype_of(DType::F16).unwrap(), DType::F16);
        assert_eq!(dtype_of(DType::BF16).unwrap(), DType::BF16);
        assert_eq!(float_size(DType::BF16).unwrap(), 2);
    }

    #[cfg(not(feature = "f16"))]
    #[test]
    fn test_dispatch_half_requires_feature() {
        assert!(matches!(
            dtype_of(DType::F16),
            Err(Error::FeatureRequired { feature: "f16", .. })
        ));
    }

    #[test]
    fn test_float_dispatch_rejects_ints() {
        assert_eq!(float_size(DType::F64).unwrap(), 8);
        assert!(matches!(
            float_size(DType::I32),
            Err(Error::InvalidDType { dtype: DType::I32, .. })
        ));
        assert!(matches!(
            float_size(DType::Bool),
            Err(Error::InvalidDType { .. })
        ));
    }
}
