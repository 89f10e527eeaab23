//! Monte Carlo verification of a weighted die.
//!
//! Rolls two independent copies of a weighted die N times and tallies sum
//! frequencies, so the exact convolution in [`crate::dice_mechanics`] can be
//! checked empirically at the search optimum. Chunks run in parallel, each
//! with its own `SmallRng` derived from the base seed, so results are
//! reproducible regardless of thread count.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::constants::{MIN_SUM, NUM_FACES, NUM_SUMS};
use crate::dice_mechanics::sum_probabilities;

/// Rolls per parallel chunk.
const CHUNK_ROLLS: u64 = 1 << 16;

/// A die sampled by inverse-CDF walk over its six face probabilities.
pub struct WeightedDie {
    cdf: [f64; NUM_FACES],
}

impl WeightedDie {
    /// Build from face probabilities (assumed non-negative, summing to ~1).
    pub fn new(faces: &[f64; NUM_FACES]) -> Self {
        let mut cdf = [0.0; NUM_FACES];
        let mut acc = 0.0;
        for (c, &p) in cdf.iter_mut().zip(faces) {
            acc += p;
            *c = acc;
        }
        Self { cdf }
    }

    /// Roll once, returning a face 1..=6.
    #[inline]
    pub fn roll<R: Rng>(&self, rng: &mut R) -> usize {
        let u: f64 = rng.random();
        for (i, &c) in self.cdf.iter().enumerate() {
            if u < c {
                return i + 1;
            }
        }
        // Rounding in the running sum can leave cdf[5] fractionally below 1.
        NUM_FACES
    }
}

/// Results of a batch of two-dice rolls.
pub struct SimulationResult {
    /// Tally per sum 2..12.
    pub counts: [u64; NUM_SUMS],
    /// counts / rolls.
    pub frequencies: [f64; NUM_SUMS],
    /// Exact convolution probabilities for the same die.
    pub exact: [f64; NUM_SUMS],
    /// max_k |frequency_k − exact_k|.
    pub max_abs_deviation: f64,
    pub rolls: u64,
    pub elapsed: Duration,
}

/// Roll two independent dice with the given face probabilities `rolls` times.
pub fn simulate_sums(faces: &[f64; NUM_FACES], rolls: u64, seed: u64) -> SimulationResult {
    let start = Instant::now();
    let die = WeightedDie::new(faces);

    let num_chunks = rolls.div_ceil(CHUNK_ROLLS);
    let counts = (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk));
            let chunk_rolls = CHUNK_ROLLS.min(rolls - chunk * CHUNK_ROLLS);
            let mut local = [0u64; NUM_SUMS];
            for _ in 0..chunk_rolls {
                let sum = die.roll(&mut rng) + die.roll(&mut rng);
                local[sum - MIN_SUM] += 1;
            }
            local
        })
        .reduce(
            || [0u64; NUM_SUMS],
            |mut a, b| {
                for (ai, bi) in a.iter_mut().zip(&b) {
                    *ai += bi;
                }
                a
            },
        );

    let mut frequencies = [0.0; NUM_SUMS];
    for (f, &c) in frequencies.iter_mut().zip(&counts) {
        *f = c as f64 / rolls as f64;
    }
    let exact = sum_probabilities(faces);
    let max_abs_deviation = frequencies
        .iter()
        .zip(&exact)
        .map(|(f, e)| (f - e).abs())
        .fold(0.0, f64::max);

    SimulationResult {
        counts,
        frequencies,
        exact,
        max_abs_deviation,
        rolls,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATURAL_COORD;
    use crate::dice_mechanics::face_probabilities;

    #[test]
    fn counts_sum_to_rolls() {
        let faces = face_probabilities(NATURAL_COORD, NATURAL_COORD);
        let result = simulate_sums(&faces, 100_000, 42);
        assert_eq!(result.counts.iter().sum::<u64>(), 100_000);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let faces = face_probabilities(0.2, 0.15);
        let a = simulate_sums(&faces, 50_000, 7);
        let b = simulate_sums(&faces, 50_000, 7);
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn frequencies_approach_exact_convolution() {
        // ~6σ per bin at 200k rolls is well under 5e-3.
        let faces = face_probabilities(NATURAL_COORD, NATURAL_COORD);
        let result = simulate_sums(&faces, 200_000, 42);
        assert!(
            result.max_abs_deviation < 5e-3,
            "max deviation {} too large",
            result.max_abs_deviation
        );
    }

    #[test]
    fn degenerate_die_only_rolls_middle_faces() {
        let faces = face_probabilities(0.0, 0.0);
        let result = simulate_sums(&faces, 10_000, 1);
        // Only sums 6, 7, 8 are possible.
        assert_eq!(result.counts[0..4].iter().sum::<u64>(), 0);
        assert_eq!(result.counts[7..].iter().sum::<u64>(), 0);
        assert_eq!(result.counts[4..7].iter().sum::<u64>(), 10_000);
    }
}
