//! # distfill
//!
//! **Generator-locked distribution fill kernels for dense tensors.**
//!
//! distfill writes samples from probability distributions into caller-owned
//! buffers of any supported element type, drawing from a shared, lockable
//! pseudorandom generator.
//!
//! ## Features
//!
//! - **Distributions**: integer uniform, uniform, normal, Cauchy, log-normal,
//!   exponential, geometric, Bernoulli (scalar or per-element probability)
//! - **Many dtypes**: f64, f32, f16, bf16, signed integers, u8, bool, one
//!   generic kernel body per distribution
//! - **Generator locking**: one lock per call, so calls sharing a generator
//!   never interleave their draws
//! - **Vectorized normal fill**: AVX2+FMA Box-Muller for contiguous f32 views
//! - **Pluggable engines**: MT19937 (default), Philox4x32-10, any `rand` RNG
//!
//! ## Quick Start
//!
//! ```rust
//! use distfill::prelude::*;
//!
//! let gen = Generator::new(42);
//! let mut data = vec![0.0f32; 1024];
//! let mut view = TensorMut::from_slice(&mut data, &[32, 32])?;
//!
//! CpuDistributions.normal(&mut view, 0.0, 1.0, Some(&gen))?;
//! CpuDistributions.bernoulli(&mut view, 0.25, Some(&gen))?;
//! # Ok::<(), distfill::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16` (default): Half-precision floats (F16, BF16)
//! - `simd` (default): Runtime-detected AVX2 path for the f32 normal fill

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distributions;
pub mod dtype;
pub mod error;
pub mod generator;
pub mod kernels;
pub mod ops;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{Bool, DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::generator::{default_generator, Generator};
    pub use crate::ops::{CpuDistributions, DistributionOps};
    pub use crate::tensor::{Layout, TensorMut, TensorRef};
}
