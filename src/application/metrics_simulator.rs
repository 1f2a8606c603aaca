// Metrics simulator - Periodically perturbs the live dashboard snapshot
use crate::application::delta_source::DeltaSource;
use crate::domain::metrics::LiveMetricsSnapshot;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("no timer facility available: {0}")]
    TimerUnavailable(String),
    #[error("tick interval must be greater than zero")]
    InvalidInterval,
}

/// Owns one session's snapshot and is its only mutator
pub struct MetricsSimulator {
    snapshot: LiveMetricsSnapshot,
    source: Box<dyn DeltaSource>,
    clamp_counts: bool,
    stopped: bool,
    ticks: u64,
}

impl MetricsSimulator {
    pub fn new(initial: LiveMetricsSnapshot, source: Box<dyn DeltaSource>) -> Self {
        Self {
            snapshot: initial,
            source,
            clamp_counts: false,
            stopped: false,
            ticks: 0,
        }
    }

    /// Floor bus, taxi and passenger counts at zero
    pub fn with_count_floor(mut self, clamp_counts: bool) -> Self {
        self.clamp_counts = clamp_counts;
        self
    }

    pub fn snapshot(&self) -> LiveMetricsSnapshot {
        self.snapshot
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance one tick. Returns `None` once stopped, leaving the snapshot untouched.
    pub fn tick(&mut self) -> Option<LiveMetricsSnapshot> {
        if self.stopped {
            return None;
        }

        let delta = self.source.next_delta();
        let mut next = self.snapshot.apply(&delta);

        if self.clamp_counts {
            next = next.with_counts_floored();
        } else {
            let negative = next.negative_counts();
            if !negative.is_empty() {
                tracing::warn!(fields = ?negative, "simulated counts dropped below zero");
            }
        }

        self.snapshot = next;
        self.ticks += 1;
        Some(next)
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Spawn the repeating timer on the current tokio runtime.
    /// The first tick fires one full interval after start.
    pub fn start(self, interval: Duration) -> Result<SimulatorHandle, SimulatorError> {
        if interval.is_zero() {
            return Err(SimulatorError::InvalidInterval);
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SimulatorError::TimerUnavailable(e.to_string()))?;

        let (tx, rx) = watch::channel(self.snapshot());
        let core = Arc::new(Mutex::new(self));
        let task_core = core.clone();

        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                // Publish under the lock so nothing is sent after stop() returns
                let mut simulator = task_core.lock().unwrap_or_else(PoisonError::into_inner);
                match simulator.tick() {
                    Some(snapshot) => {
                        tx.send_replace(snapshot);
                    }
                    None => break,
                }
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "metrics simulator started");

        Ok(SimulatorHandle {
            core,
            updates: rx,
            task: Some(task),
        })
    }
}

/// Running simulator. Dropping the handle stops the timer.
pub struct SimulatorHandle {
    core: Arc<Mutex<MetricsSimulator>>,
    updates: watch::Receiver<LiveMetricsSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl SimulatorHandle {
    /// Read-only view of the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<LiveMetricsSnapshot> {
        self.updates.clone()
    }

    pub fn current(&self) -> LiveMetricsSnapshot {
        *self.updates.borrow()
    }

    /// Cancel the timer. Safe to call any number of times.
    pub fn stop(&mut self) {
        {
            let mut simulator = self.core.lock().unwrap_or_else(PoisonError::into_inner);
            if !simulator.is_stopped() {
                simulator.stop();
                tracing::debug!(ticks = simulator.ticks(), "metrics simulator stopped");
            }
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::MetricsDelta;

    fn fixed(delta: MetricsDelta) -> Box<dyn DeltaSource> {
        Box::new(move || delta)
    }

    fn seed_delta() -> MetricsDelta {
        MetricsDelta {
            buses: 3,
            taxis: -2,
            passengers: 50,
            delay_minutes: -0.2,
            revenue: 500,
        }
    }

    #[test]
    fn test_single_tick_with_stubbed_deltas() {
        let mut simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));

        let next = simulator.tick().unwrap();

        assert_eq!(
            next,
            LiveMetricsSnapshot {
                active_buses: 145,
                active_taxis: 87,
                total_passengers: 8300,
                average_delay_minutes: 2.6,
                revenue: 46100,
            }
        );
        assert_eq!(simulator.snapshot(), next);
        assert_eq!(simulator.ticks(), 1);
    }

    #[test]
    fn test_delay_never_negative_across_ticks() {
        let mut simulator = MetricsSimulator::new(
            LiveMetricsSnapshot::default(),
            fixed(MetricsDelta {
                delay_minutes: -7.5,
                ..Default::default()
            }),
        );

        for _ in 0..20 {
            let snapshot = simulator.tick().unwrap();
            assert!(snapshot.average_delay_minutes >= 0.0);
        }
        assert_eq!(simulator.snapshot().average_delay_minutes, 0.0);
    }

    #[test]
    fn test_tick_after_stop_does_not_mutate() {
        let mut simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));
        for _ in 0..3 {
            simulator.tick();
        }
        let before = simulator.snapshot();

        simulator.stop();
        simulator.stop();

        assert!(simulator.tick().is_none());
        assert!(simulator.tick().is_none());
        assert_eq!(simulator.snapshot(), before);
        assert_eq!(simulator.ticks(), 3);
    }

    #[test]
    fn test_count_floor_is_opt_in() {
        let draining = MetricsDelta {
            buses: -200,
            ..Default::default()
        };

        let mut unclamped = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(draining));
        assert_eq!(unclamped.tick().unwrap().active_buses, -58);

        let mut clamped = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(draining))
            .with_count_floor(true);
        assert_eq!(clamped.tick().unwrap().active_buses, 0);
    }

    #[test]
    fn test_start_without_runtime_fails() {
        let simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));
        let result = simulator.start(Duration::from_millis(100));
        assert!(matches!(result, Err(SimulatorError::TimerUnavailable(_))));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));
        let result = simulator.start(Duration::ZERO);
        assert!(matches!(result, Err(SimulatorError::InvalidInterval)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_simulator_publishes_each_tick() {
        let simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));
        let mut handle = simulator.start(Duration::from_secs(3)).unwrap();
        let mut updates = handle.subscribe();
        let started = Instant::now();

        updates.changed().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(3));
        assert_eq!(updates.borrow_and_update().active_buses, 145);

        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().active_buses, 148);
        assert_eq!(handle.current().active_buses, 148);

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_updates_and_is_idempotent() {
        let simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));
        let mut handle = simulator.start(Duration::from_secs(1)).unwrap();
        let mut updates = handle.subscribe();

        updates.changed().await.unwrap();
        updates.changed().await.unwrap();
        let frozen = handle.current();

        handle.stop();
        handle.stop();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(handle.current(), frozen);
        assert_eq!(frozen.active_buses, 148);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_timer() {
        let simulator = MetricsSimulator::new(LiveMetricsSnapshot::default(), fixed(seed_delta()));
        let handle = simulator.start(Duration::from_secs(1)).unwrap();
        let mut updates = handle.subscribe();

        drop(handle);

        // The publishing task is gone, so the channel closes instead of ticking
        assert!(updates.changed().await.is_err());
        assert_eq!(*updates.borrow(), LiveMetricsSnapshot::default());
    }
}
