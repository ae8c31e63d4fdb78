//! Bit-stream engines behind a [`Generator`](super::Generator)
//!
//! The kernels only ever ask for 32 or 64 random bits; how those bits are
//! produced is the engine's business.

use rand::{RngCore, SeedableRng};

/// Source of raw pseudorandom words
///
/// Engines are not thread-safe on their own; they are only reached through
/// the generator's lock.
pub trait RandomEngine: Send {
    /// Construct an engine from a 64-bit seed
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    /// Next 32 random bits
    fn next_u32(&mut self) -> u32;

    /// Next 64 random bits
    ///
    /// Defaults to two 32-bit draws, the first one in the high half.
    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Reset the engine to the state `from_seed(seed)` would produce
    fn reseed(&mut self, seed: u64);

    /// Short engine name for diagnostics
    fn name(&self) -> &'static str;
}

/// Adapter running any seedable `rand` RNG as an engine
///
/// # Example
/// ```
/// use distfill::generator::{Generator, SeedableEngine};
/// use rand::rngs::StdRng;
///
/// let gen = Generator::with_engine::<SeedableEngine<StdRng>>(7);
/// assert_eq!(gen.initial_seed(), 7);
/// ```
pub struct SeedableEngine<R>(R);

impl<R> RandomEngine for SeedableEngine<R>
where
    R: RngCore + SeedableRng + Send,
{
    fn from_seed(seed: u64) -> Self {
        Self(R::seed_from_u64(seed))
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn reseed(&mut self, seed: u64) {
        self.0 = R::seed_from_u64(seed);
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<R>()
    }
}
