//! Uniform random sampling without replacement.
//!
//! A sample of `round(n * rate)` items is drawn by a partial Fisher-Yates
//! shuffle over an owned copy of the input: step `i` swaps a uniformly chosen
//! element of the not-yet-drawn tail `[i, n)` into slot `i`. The first `m`
//! slots are the sample, the tail is what was left behind, so both halves are
//! handed back to the caller.
//!
//! Rates outside `(0, 1]` (or non-finite) and empty inputs produce an empty
//! sample with every item in `remaining`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<T> {
    pub sampled: Vec<T>,
    pub remaining: Vec<T>,
}

/// Number of items drawn from `n` at `rate`.
pub fn sample_size(n: usize, rate: f64) -> usize {
    if n == 0 || !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
        return 0;
    }
    ((n as f64 * rate).round() as usize).min(n)
}

pub fn sample<T: Clone, R: Rng>(items: &[T], rate: f64, rng: &mut R) -> Sample<T> {
    let m = sample_size(items.len(), rate);
    let mut pool = items.to_vec();

    for i in 0..m {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }

    let remaining = pool.split_off(m);
    debug!(
        total = items.len(),
        rate,
        sampled = pool.len(),
        "sampled triangulation sites"
    );

    Sample {
        sampled: pool,
        remaining,
    }
}

/// Reproducible sample driven by a seeded [`StdRng`].
pub fn sample_seeded<T: Clone>(items: &[T], rate: f64, seed: u64) -> Sample<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample(items, rate, &mut rng)
}

/// Sample driven by the thread-local RNG.
pub fn sample_random<T: Clone>(items: &[T], rate: f64) -> Sample<T> {
    sample(items, rate, &mut rand::rng())
}
