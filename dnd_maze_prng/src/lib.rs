// Deterministic, portable pseudo-random number generator.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
// The generator itself is hand-rolled so that output is identical across all
// platforms; `rand` is used for exactly one thing, drawing a seed from the
// operating system when the caller did not supply one.
//
// This crate is the single PRNG used across the dungeon maze workspace:
// `dnd_maze_names` (room and passage names) and `dnd_maze` (layout carving,
// room contents, connection lengths). Each generation run owns one `MazeRng`
// and threads it explicitly through every phase; there is no process-wide
// random state.
//
// **Critical constraint: determinism.** Every method on `MazeRng` must produce
// identical output given the same prior state, regardless of platform, compiler
// version, or optimization level. Do not use floating-point arithmetic in the
// core generator, stdlib PRNG, or any source of non-determinism in this module.
// `entropy_seed()` is the only non-deterministic entry point and it only ever
// produces a seed, which callers record.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ PRNG: the workspace's sole source of randomness.
///
/// Two streams built from the same seed and driven through the same call
/// sequence yield the same values, which is what makes a maze reproducible
/// from its seed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MazeRng {
    s: [u64; 4],
}

impl MazeRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Create a PRNG from a freshly drawn entropy seed.
    ///
    /// Prefer `MazeRng::new(entropy_seed())` when the seed needs to be kept
    /// for later reproduction.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Uses the upper 53 bits of a `u64` to fill the mantissa of an f64.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // Rejection sampling to avoid modulo bias.
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Generate a uniform random integer in `[low, high]` (inclusive on both ends).
    ///
    /// `low == high` always returns `low`. Panics if `low > high`.
    pub fn next_int(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "next_int: low must be <= high");
        let span = high.wrapping_sub(low) as u64;
        if span == u64::MAX {
            // Full i64 range: every u64 maps to a distinct value.
            return self.next_u64() as i64;
        }
        low.wrapping_add(self.range_u64(0, span + 1) as i64)
    }

    /// Return `true` with probability `p`, `false` otherwise.
    ///
    /// `p <= 0.0` always returns false, `p >= 1.0` always returns true.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly. Returns `None` for an empty slice
    /// without consuming any randomness.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_usize(0, items.len());
        Some(&items[idx])
    }
}

/// Draw a seed from the operating system's entropy source.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// SplitMix64: used only for seeding xoshiro256++ from a single `u64`.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = MazeRng::new(42);
        let mut b = MazeRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = MazeRng::new(42);
        let mut b = MazeRng::new(43);
        // Extremely unlikely to collide on the first value.
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn mixed_call_sequence_is_reproducible() {
        let words = ["Dark", "Dusty", "Eerie", "Mossy"];
        let mut a = MazeRng::new(2024);
        let mut b = MazeRng::new(2024);
        for _ in 0..500 {
            assert_eq!(a.next_int(1, 10), b.next_int(1, 10));
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
            assert_eq!(a.choose(&words), b.choose(&words));
        }
    }

    #[test]
    fn f64_in_unit_range() {
        let mut rng = MazeRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "f64 out of range: {v}");
        }
    }

    #[test]
    fn range_u64_within_bounds() {
        let mut rng = MazeRng::new(999);
        for _ in 0..10_000 {
            let v = rng.range_u64(10, 20);
            assert!((10..20).contains(&v), "range_u64 out of range: {v}");
        }
    }

    #[test]
    fn range_usize_within_bounds() {
        let mut rng = MazeRng::new(555);
        for _ in 0..10_000 {
            let v = rng.range_usize(5, 15);
            assert!((5..15).contains(&v), "range_usize out of range: {v}");
        }
    }

    #[test]
    fn next_int_within_bounds_and_reaches_both_ends() {
        let mut rng = MazeRng::new(666);
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..10_000 {
            let v = rng.next_int(3, 7);
            assert!((3..=7).contains(&v), "next_int out of range: {v}");
            saw_low |= v == 3;
            saw_high |= v == 7;
        }
        assert!(saw_low && saw_high, "next_int should reach both bounds");
    }

    #[test]
    fn next_int_handles_negative_and_degenerate_ranges() {
        let mut rng = MazeRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_int(-4, -1);
            assert!((-4..=-1).contains(&v));
        }
        for _ in 0..100 {
            assert_eq!(rng.next_int(5, 5), 5);
        }
        // Full range must not overflow.
        let _ = rng.next_int(i64::MIN, i64::MAX);
    }

    #[test]
    #[should_panic(expected = "low must be <= high")]
    fn next_int_rejects_inverted_range() {
        let mut rng = MazeRng::new(1);
        rng.next_int(10, 1);
    }

    #[test]
    fn random_bool_distribution() {
        let mut rng = MazeRng::new(42);
        let mut true_count = 0;
        let n = 10_000;
        for _ in 0..n {
            if rng.random_bool(0.5) {
                true_count += 1;
            }
        }
        // Should be roughly 50% ± 5%
        let pct = true_count as f64 / n as f64;
        assert!(
            (0.45..0.55).contains(&pct),
            "random_bool(0.5) should be ~50%, got {:.1}%",
            pct * 100.0
        );
    }

    #[test]
    fn random_bool_extremes() {
        let mut rng = MazeRng::new(42);
        for _ in 0..100 {
            assert!(!rng.random_bool(0.0));
        }
        for _ in 0..100 {
            assert!(rng.random_bool(1.0));
        }
    }

    #[test]
    fn choose_covers_every_element() {
        let items = [1u8, 2, 3, 4];
        let mut seen = [false; 4];
        let mut rng = MazeRng::new(31);
        for _ in 0..1000 {
            let v = *rng.choose(&items).unwrap();
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn choose_empty_consumes_nothing() {
        let empty: [u32; 0] = [];
        let mut a = MazeRng::new(8);
        let mut b = MazeRng::new(8);
        assert_eq!(a.choose(&empty), None);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn entropy_streams_are_usable() {
        let mut rng = MazeRng::from_entropy();
        let v = rng.next_int(1, 6);
        assert!((1..=6).contains(&v));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = MazeRng::new(42);
        // Advance state
        for _ in 0..100 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: MazeRng = serde_json::from_str(&json).unwrap();
        // Continued sequences should match.
        for _ in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }

    #[test]
    fn known_sequence_from_seed_zero() {
        // SplitMix64 from state 0 is a published reference; the first expanded
        // word must match it or seeding has drifted.
        let mut sm = 0u64;
        assert_eq!(splitmix64(&mut sm), 0xe220_a839_7b1d_cdaf);
        let mut rng = MazeRng::new(0);
        let vals: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
        let mut rng2 = MazeRng::new(0);
        let vals2: Vec<u64> = (0..5).map(|_| rng2.next_u64()).collect();
        assert_eq!(vals, vals2);
    }
}
