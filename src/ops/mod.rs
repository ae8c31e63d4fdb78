//! Distribution operations
//!
//! This module defines the public operation trait and its CPU implementation.
//!
//! # Design
//!
//! ```text
//! CpuDistributions
//!   └── implements DistributionOps
//!         ├── random, random_from_to, random_full_range, random_between
//!         ├── uniform, normal, cauchy, log_normal, exponential
//!         └── geometric, bernoulli, bernoulli_tensor
//! ```
//!
//! Each method resolves `Option<&Generator>` to a concrete generator and
//! forwards to the matching function in [`crate::kernels`]. The kernels pick
//! the element type at runtime through [`dispatch_dtype!`](crate::dispatch_dtype)
//! and [`dispatch_float_dtype!`](crate::dispatch_float_dtype).

pub(crate) mod dispatch;

mod cpu;
mod traits;

pub use cpu::CpuDistributions;
pub use traits::DistributionOps;
