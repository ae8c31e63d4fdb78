//! Vectorized transcendental functions used by the normal fill

pub mod common;

#[cfg(target_arch = "x86_64")]
pub mod avx2;
