//! Simulation step - the random walk behind the stats.
//!
//! `advance` is pure apart from the draws it takes from the supplied
//! [`RandomSource`]. Draw order is fixed so a seeded source gives a fixed
//! trajectory:
//!
//! 1. score gain, uniform in `0..=SCORE_STEP_MAX`
//! 2. wave trial, `WAVE_CHANCE`
//! 3. gem trial, `GEM_CHANCE`
//! 4. gem amount in `GEM_MIN..=GEM_MAX`, only drawn when the gem trial succeeds

use crate::rng::RandomSource;
use crate::types::{Stats, GEM_CHANCE, GEM_MAX, GEM_MIN, SCORE_STEP_MAX, WAVE_CHANCE};

/// Compute the stats of the next running tick.
pub fn advance(stats: &Stats, rng: &mut impl RandomSource) -> Stats {
    let mut next = *stats;

    let gain = rng.next_int(0, SCORE_STEP_MAX);
    next.score = next.score.saturating_add(gain as u64);

    if rng.chance(WAVE_CHANCE) {
        next.wave = next.wave.saturating_add(1);
        log::debug!("wave {} -> {}", stats.wave, next.wave);
    }

    if rng.chance(GEM_CHANCE) {
        let found = rng.next_int(GEM_MIN, GEM_MAX);
        next.gems = next.gems.saturating_add(found);
    }

    next
}
