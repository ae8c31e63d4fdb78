//! Operation traits

mod distribution;

pub use distribution::DistributionOps;
