// Live metrics service - One simulator per dashboard view session
use crate::application::delta_source::DeltaSource;
use crate::application::metrics_simulator::{MetricsSimulator, SimulatorError, SimulatorHandle};
use crate::domain::metrics::LiveMetricsSnapshot;
use std::sync::Arc;
use std::time::Duration;

pub type DeltaSourceFactory = Arc<dyn Fn() -> Box<dyn DeltaSource> + Send + Sync>;

#[derive(Clone)]
pub struct LiveMetricsService {
    initial: LiveMetricsSnapshot,
    interval: Duration,
    clamp_counts: bool,
    delta_sources: DeltaSourceFactory,
}

impl LiveMetricsService {
    pub fn new(
        initial: LiveMetricsSnapshot,
        interval: Duration,
        clamp_counts: bool,
        delta_sources: DeltaSourceFactory,
    ) -> Self {
        Self {
            initial,
            interval,
            clamp_counts,
            delta_sources,
        }
    }

    /// Seed snapshot a freshly opened view starts from
    pub fn initial_snapshot(&self) -> LiveMetricsSnapshot {
        self.initial
    }

    /// Start a simulator for a new view. The session ends when the handle is dropped.
    pub fn open_session(&self) -> Result<SimulatorHandle, SimulatorError> {
        let simulator = MetricsSimulator::new(self.initial, (self.delta_sources)())
            .with_count_floor(self.clamp_counts);
        simulator.start(self.interval)
    }
}
