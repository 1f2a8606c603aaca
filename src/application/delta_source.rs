// Source of per-tick perturbations for the metrics simulator
use crate::domain::metrics::MetricsDelta;
use serde::Deserialize;

/// Symmetric bound for each field's delta: draws land in `[-bound, +bound]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeltaBounds {
    pub buses: i64,
    pub taxis: i64,
    pub passengers: i64,
    pub delay_minutes: f64,
    pub revenue: i64,
}

impl Default for DeltaBounds {
    fn default() -> Self {
        Self {
            buses: 3,
            taxis: 2,
            passengers: 50,
            delay_minutes: 0.2,
            revenue: 500,
        }
    }
}

impl DeltaBounds {
    /// Bounds as magnitudes, saturating at `i64::MAX`. A non-finite delay bound draws nothing.
    pub fn normalized(self) -> Self {
        let delay_minutes = if self.delay_minutes.is_finite() {
            self.delay_minutes.abs()
        } else {
            0.0
        };
        Self {
            buses: self.buses.saturating_abs(),
            taxis: self.taxis.saturating_abs(),
            passengers: self.passengers.saturating_abs(),
            delay_minutes,
            revenue: self.revenue.saturating_abs(),
        }
    }

    pub fn contains(&self, delta: &MetricsDelta) -> bool {
        delta.buses.unsigned_abs() <= self.buses.unsigned_abs()
            && delta.taxis.unsigned_abs() <= self.taxis.unsigned_abs()
            && delta.passengers.unsigned_abs() <= self.passengers.unsigned_abs()
            && delta.delay_minutes.abs() <= self.delay_minutes.abs()
            && delta.revenue.unsigned_abs() <= self.revenue.unsigned_abs()
    }
}

pub trait DeltaSource: Send {
    fn next_delta(&mut self) -> MetricsDelta;
}

impl<F> DeltaSource for F
where
    F: FnMut() -> MetricsDelta + Send,
{
    fn next_delta(&mut self) -> MetricsDelta {
        self()
    }
}
