//! Seeded random generators for super RSK inputs.
//!
//! Produces ordered, restricted biwords by construction: letters are drawn
//! at random, sorted, and repeats of odd-parity-sum letters are dropped.
//! Uses the xoshiro256** PRNG for reproducible sequences when seeded.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use super_rsk::{Biletter, Biword, SignedMultiset, SignedValue};

/// A fuzzer for generating random correspondence inputs.
///
/// # Examples
///
/// ```
/// use super_rsk_random::BiwordFuzzer;
///
/// let mut fuzzer = BiwordFuzzer::from_seed_u64(7);
/// let w = fuzzer.biword(6, 3, 4);
/// assert!(w.is_ordered());
/// assert!(w.is_restricted());
/// ```
pub struct BiwordFuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl BiwordFuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        let rng = Xoshiro256StarStar::from_seed(seed);
        BiwordFuzzer { seed, rng }
    }

    /// Create a fuzzer from a 64-bit seed, for seed-table-driven suites.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        BiwordFuzzer::new(Some(bytes))
    }

    /// A random nonzero entry with magnitude in `1..=magnitude`, barred
    /// half the time.
    pub fn value(&mut self, magnitude: i64) -> SignedValue {
        let raw = self.rng.gen_range(1..=magnitude.max(1));
        if self.rng.gen_bool(0.5) {
            SignedValue::new(-raw)
        } else {
            SignedValue::new(raw)
        }
    }

    /// A random multiset with between one and `max_len` entries.
    pub fn multiset(&mut self, max_len: usize, magnitude: i64) -> SignedMultiset {
        let len = self.rng.gen_range(1..=max_len.max(1));
        (0..len).map(|_| self.value(magnitude)).collect()
    }

    /// A random biletter.
    pub fn biletter(&mut self, max_len: usize, magnitude: i64) -> Biletter {
        let top = self.multiset(max_len, magnitude);
        let bottom = self.multiset(max_len, magnitude);
        Biletter::new(top, bottom)
    }

    /// An ordered, restricted biword with at most `letters` letters.
    ///
    /// Drawn letters are sorted; repeated odd-parity-sum letters are then
    /// dropped, so the result may be shorter than requested.
    pub fn biword(&mut self, letters: usize, max_len: usize, magnitude: i64) -> Biword {
        let mut drawn: Vec<Biletter> = (0..letters)
            .map(|_| self.biletter(max_len, magnitude))
            .collect();
        drawn.sort();

        let mut kept: Vec<Biletter> = Vec::with_capacity(drawn.len());
        for letter in drawn {
            // Equal letters are adjacent after sorting, so one lookback
            // suffices to enforce the restriction.
            if letter.has_odd_parity_sum() && kept.last() == Some(&letter) {
                continue;
            }
            kept.push(letter);
        }
        Biword::new(kept)
    }
}
