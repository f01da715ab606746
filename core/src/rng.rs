//! Deterministic random number generation for agent placement.
//!
//! RULE: nothing in the generator may call any platform RNG.
//! The layout itself is fixed; the only random draw is the fallback
//! agent placement, seeded from `LevelConfig::placement_seed`.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A seeded stream for the free-cell placer.
pub struct PlacementRng {
    inner: Pcg64Mcg,
}

impl PlacementRng {
    pub fn new(seed: u64) -> Self {
        // Spread low-entropy seeds (0, 1, 42...) across the state space.
        let derived_seed = seed ^ 0x9e37_79b9_7f4a_7c15;
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an i32 in [lo, hi). Returns `lo` for an empty range.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = u64::from(hi.abs_diff(lo));
        let offset = i64::try_from(self.next_u64_below(span)).unwrap_or(0);
        i32::try_from(i64::from(lo) + offset).unwrap_or(lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = PlacementRng::new(7);
        let mut b = PlacementRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = PlacementRng::new(1);
        for _ in 0..1000 {
            let v = rng.range_i32(1, 43);
            assert!((1..43).contains(&v), "{v} escaped [1, 43)");
        }
        assert_eq!(rng.range_i32(5, 5), 5);
    }
}
