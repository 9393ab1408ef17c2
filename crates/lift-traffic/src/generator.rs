//! Seeded synthetic passenger traffic.
//!
//! The same seed always produces the same records, so generated scenarios
//! are as reproducible as files on disk.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::Tick;

use crate::ArrivalRecord;

/// Builder-style generator for random [`ArrivalRecord`]s.
///
/// ```rust,ignore
/// let records = TrafficGenerator::new(6, 42)
///     .groups(50)
///     .horizon_ticks(600)
///     .generate();
/// ```
#[derive(Clone, Debug)]
pub struct TrafficGenerator {
    num_floors:     u16,
    seed:           u64,
    groups:         usize,
    horizon_ticks:  u64,
    max_group_size: u32,
    patience:       (u64, u64),
    impolite_share: f64,
}

impl TrafficGenerator {
    /// A generator for a building of `num_floors` floors (at least 2).
    pub fn new(num_floors: u16, seed: u64) -> Self {
        Self {
            num_floors: num_floors.max(2),
            seed,
            groups:         20,
            horizon_ticks:  300,
            max_group_size: 5,
            patience:       (100, 1000),
            impolite_share: 0.1,
        }
    }

    /// Number of groups to generate.
    pub fn groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }

    /// Arrival ticks are drawn from `0..horizon_ticks`.
    pub fn horizon_ticks(mut self, horizon_ticks: u64) -> Self {
        self.horizon_ticks = horizon_ticks.max(1);
        self
    }

    /// Group sizes are drawn from `1..=max_group_size`.
    pub fn max_group_size(mut self, max_group_size: u32) -> Self {
        self.max_group_size = max_group_size.max(1);
        self
    }

    /// Patience is drawn from `min..=max` ticks.
    pub fn patience(mut self, min: u64, max: u64) -> Self {
        self.patience = (min.min(max), min.max(max));
        self
    }

    /// Fraction of groups, in `[0, 1]`, that are impolite.
    pub fn impolite_share(mut self, share: f64) -> Self {
        self.impolite_share = share.clamp(0.0, 1.0);
        self
    }

    /// Produce the records, sorted by arrival tick.
    pub fn generate(&self) -> Vec<ArrivalRecord> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut records: Vec<ArrivalRecord> = (0..self.groups)
            .map(|_| {
                let origin = rng.gen_range(1..=self.num_floors);
                // Draw from the other floors so origin != destination.
                let mut destination = rng.gen_range(1..self.num_floors);
                if destination >= origin {
                    destination += 1;
                }
                ArrivalRecord {
                    tick:     Tick(rng.gen_range(0..self.horizon_ticks)),
                    size:     rng.gen_range(1..=self.max_group_size),
                    origin,
                    destination,
                    polite:   !rng.gen_bool(self.impolite_share),
                    patience: rng.gen_range(self.patience.0..=self.patience.1),
                }
            })
            .collect();
        // Stable sort keeps generation order within a tick.
        records.sort_by_key(|r| r.tick);
        records
    }
}
