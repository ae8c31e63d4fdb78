//! Distribution math shared by every kernel
//!
//! [`transformation`] holds the pure maps from random bits or uniforms to
//! samples; [`samplers`] binds them to validated parameters and a locked
//! generator.

pub mod samplers;
pub mod transformation;

pub use samplers::{
    BernoulliDistribution, Cauchy, Exponential, Geometric, LogNormal, NormalDistribution, Sampler,
    UniformInt, UniformIntFromTo, UniformIntFullRange, UniformPrecision, UniformReal,
};
