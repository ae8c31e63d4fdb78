//! CPU operation implementations

mod distribution;

/// Entry point for the CPU sampling kernels
///
/// A unit type: all state lives in the [`Generator`](crate::generator::Generator)
/// passed to (or defaulted by) each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuDistributions;
