// Pseudo-random delta source backed by ChaCha8
use crate::application::delta_source::{DeltaBounds, DeltaSource};
use crate::domain::metrics::MetricsDelta;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct RandomDeltaSource {
    rng: ChaCha8Rng,
    bounds: DeltaBounds,
}

impl RandomDeltaSource {
    pub fn new(bounds: DeltaBounds, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            bounds: bounds.normalized(),
        }
    }
}

impl DeltaSource for RandomDeltaSource {
    fn next_delta(&mut self) -> MetricsDelta {
        let b = self.bounds;
        let delta = MetricsDelta {
            buses: self.rng.gen_range(-b.buses..=b.buses),
            taxis: self.rng.gen_range(-b.taxis..=b.taxis),
            passengers: self.rng.gen_range(-b.passengers..=b.passengers),
            delay_minutes: self.rng.gen_range(-b.delay_minutes..=b.delay_minutes),
            revenue: self.rng.gen_range(-b.revenue..=b.revenue),
        };
        debug_assert!(b.contains(&delta));
        delta
    }
}
