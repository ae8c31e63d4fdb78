//! Mersenne Twister engine (MT19937, 32-bit)

use super::engine::RandomEngine;
use rand_mt::Mt;

/// MT19937 engine, the default behind [`Generator::new`](super::Generator::new)
///
/// Only the low 32 bits of the seed are used. 64-bit draws combine two
/// consecutive 32-bit outputs, first one high.
pub struct Mt19937 {
    mt: Box<Mt>,
}

impl RandomEngine for Mt19937 {
    fn from_seed(seed: u64) -> Self {
        Self {
            mt: Box::new(Mt::new(seed as u32)),
        }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    fn reseed(&mut self, seed: u64) {
        *self.mt = Mt::new(seed as u32);
    }

    fn name(&self) -> &'static str {
        "mt19937"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_output() {
        // First output of the reference implementation seeded with 5489
        let mut engine = Mt19937::from_seed(5489);
        assert_eq!(engine.next_u32(), 3_499_211_612);
    }

    #[test]
    fn test_u64_is_two_u32_draws() {
        let mut a = Mt19937::from_seed(123);
        let mut b = Mt19937::from_seed(123);
        let hi = b.next_u32() as u64;
        let lo = b.next_u32() as u64;
        assert_eq!(a.next_u64(), (hi << 32) | lo);
    }

    #[test]
    fn test_seed_truncated_to_32_bits() {
        let mut a = Mt19937::from_seed(0x1_0000_0007);
        let mut b = Mt19937::from_seed(7);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
