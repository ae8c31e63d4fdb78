//! Pseudorandom generators shared by the sampling kernels
//!
//! A [`Generator`] is a cheap, clonable handle to mutex-guarded
//! [`CpuGenerator`] state. Kernels take the lock once per call and hold it for
//! every draw the call makes, so whole calls are atomic with respect to other
//! users of the same generator. Distinct generators never contend.
//!
//! ```
//! use distfill::generator::Generator;
//!
//! let gen = Generator::new(42);
//! let (a, b) = gen.with_lock(|g| (g.random(), g.random64()));
//!
//! gen.manual_seed(42);
//! assert_eq!(gen.with_lock(|g| (g.random(), g.random64())), (a, b));
//! ```

mod engine;
mod mt19937;
mod philox;

pub use engine::{RandomEngine, SeedableEngine};
pub use mt19937::Mt19937;
pub use philox::Philox4x32;

use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Seed of the process-wide default generator
pub const DEFAULT_SEED: u64 = 67280421310721;

// ============================================================================
// Generator state
// ============================================================================

/// Generator state reached through a [`Generator`] lock
///
/// Owns the engine, the seed it was last seeded with, and the cached second
/// sample of the double-precision Box-Muller transform.
pub struct CpuGenerator {
    engine: Box<dyn RandomEngine>,
    seed: u64,
    next_double_normal_sample: Option<f64>,
}

impl CpuGenerator {
    fn new(engine: Box<dyn RandomEngine>, seed: u64) -> Self {
        Self {
            engine,
            seed,
            next_double_normal_sample: None,
        }
    }

    /// 32 random bits
    #[inline]
    pub fn random(&mut self) -> u32 {
        self.engine.next_u32()
    }

    /// 64 random bits
    #[inline]
    pub fn random64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Seed the engine was last seeded with
    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    /// Reseed the engine and drop any cached normal sample
    pub fn set_current_seed(&mut self, seed: u64) {
        self.engine.reseed(seed);
        self.seed = seed;
        self.next_double_normal_sample = None;
    }

    /// Take the cached second Box-Muller sample, if any
    #[inline]
    pub fn take_next_double_normal_sample(&mut self) -> Option<f64> {
        self.next_double_normal_sample.take()
    }

    /// Cache the second Box-Muller sample for the next normal draw
    #[inline]
    pub fn set_next_double_normal_sample(&mut self, sample: f64) {
        self.next_double_normal_sample = Some(sample);
    }

    /// Name of the underlying engine
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }
}

impl rand::RngCore for CpuGenerator {
    fn next_u32(&mut self) -> u32 {
        self.random()
    }

    fn next_u64(&mut self) -> u64 {
        self.random64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}

impl fmt::Debug for CpuGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuGenerator")
            .field("engine", &self.engine.name())
            .field("seed", &self.seed)
            .field("cached_normal", &self.next_double_normal_sample.is_some())
            .finish()
    }
}

// ============================================================================
// Shared handle
// ============================================================================

/// Shared, lockable generator handle
///
/// Cloning the handle shares the same state.
#[derive(Clone)]
pub struct Generator {
    inner: Arc<Mutex<CpuGenerator>>,
}

impl Generator {
    /// Create an MT19937-backed generator
    pub fn new(seed: u64) -> Self {
        Self::with_engine::<Mt19937>(seed)
    }

    /// Create a generator backed by engine `E`
    pub fn with_engine<E: RandomEngine + 'static>(seed: u64) -> Self {
        Self::from_engine(Box::new(E::from_seed(seed)), seed)
    }

    /// Wrap an already-constructed engine
    ///
    /// `seed` is what [`initial_seed`](Self::initial_seed) reports; the
    /// engine is used as-is.
    pub fn from_engine(engine: Box<dyn RandomEngine>, seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CpuGenerator::new(engine, seed))),
        }
    }

    /// Acquire exclusive access to the generator state
    ///
    /// Released when the guard drops.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, CpuGenerator> {
        self.inner.lock()
    }

    /// Run `f` with the generator locked
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut CpuGenerator) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Reseed the generator
    pub fn manual_seed(&self, seed: u64) {
        self.lock().set_current_seed(seed);
    }

    /// Seed the generator was last seeded with
    pub fn initial_seed(&self) -> u64 {
        self.lock().current_seed()
    }

    /// Reseed from a nondeterministic source and return the new seed
    pub fn seed(&self) -> u64 {
        let seed: u64 = rand::random();
        self.manual_seed(seed);
        seed
    }

    /// Name of the underlying engine
    pub fn engine_name(&self) -> &'static str {
        self.lock().engine_name()
    }

    /// Whether two handles share the same state
    pub fn ptr_eq(&self, other: &Generator) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(state) => f.debug_tuple("Generator").field(&*state).finish(),
            None => f.write_str("Generator(<locked>)"),
        }
    }
}

// ============================================================================
// Process-wide default
// ============================================================================

static DEFAULT_GENERATOR: OnceLock<Generator> = OnceLock::new();

/// Process-wide default generator, created on first use
pub fn default_generator() -> &'static Generator {
    DEFAULT_GENERATOR.get_or_init(|| {
        log::debug!("creating default generator with seed {DEFAULT_SEED}");
        Generator::new(DEFAULT_SEED)
    })
}

/// Resolve an optional generator argument to a concrete generator
#[inline]
pub(crate) fn check_generator(gen: Option<&Generator>) -> &Generator {
    match gen {
        Some(g) => g,
        None => default_generator(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = Generator::new(1234);
        let b = Generator::new(1234);
        let xs: Vec<u64> = a.with_lock(|g| (0..8).map(|_| g.random64()).collect());
        let ys: Vec<u64> = b.with_lock(|g| (0..8).map(|_| g.random64()).collect());
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_clone_shares_state() {
        let a = Generator::new(5);
        let b = a.clone();
        assert!(a.ptr_eq(&b));

        let first = a.with_lock(|g| g.random());
        let reference = Generator::new(5);
        let (r0, r1) = reference.with_lock(|g| (g.random(), g.random()));
        assert_eq!(first, r0);
        assert_eq!(b.with_lock(|g| g.random()), r1);
    }

    #[test]
    fn test_reseed_clears_normal_cache() {
        let gen = Generator::new(3);
        gen.with_lock(|g| g.set_next_double_normal_sample(0.25));
        gen.manual_seed(3);
        assert_eq!(gen.with_lock(|g| g.take_next_double_normal_sample()), None);
        assert_eq!(gen.initial_seed(), 3);
    }

    #[test]
    fn test_take_normal_cache_once() {
        let gen = Generator::new(0);
        let mut state = gen.lock();
        state.set_next_double_normal_sample(1.5);
        assert_eq!(state.take_next_double_normal_sample(), Some(1.5));
        assert_eq!(state.take_next_double_normal_sample(), None);
    }

    #[test]
    fn test_nondeterministic_seed_is_reported() {
        let gen = Generator::new(0);
        let seed = gen.seed();
        assert_eq!(gen.initial_seed(), seed);
    }

    #[test]
    fn test_default_generator_is_singleton() {
        assert!(default_generator().ptr_eq(default_generator()));
        assert!(check_generator(None).ptr_eq(default_generator()));

        let local = Generator::new(1);
        assert!(check_generator(Some(&local)).ptr_eq(&local));
    }

    #[test]
    fn test_philox_engine_handle() {
        let gen = Generator::with_engine::<Philox4x32>(42);
        assert_eq!(gen.engine_name(), "philox4x32-10");
        assert_eq!(gen.initial_seed(), 42);
    }

    #[test]
    fn test_rng_core_fill_bytes() {
        use rand::RngCore;
        let gen = Generator::new(77);
        let mut buf = [0u8; 13];
        gen.lock().fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
