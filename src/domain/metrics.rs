// Live metrics domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMetricsSnapshot {
    pub active_buses: i64,
    pub active_taxis: i64,
    pub total_passengers: i64,
    pub average_delay_minutes: f64,
    pub revenue: i64,
}

impl Default for LiveMetricsSnapshot {
    /// Seed record shown when a dashboard view opens
    fn default() -> Self {
        Self {
            active_buses: 142,
            active_taxis: 89,
            total_passengers: 8250,
            average_delay_minutes: 2.8,
            revenue: 45600,
        }
    }
}

/// One tick's worth of perturbation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsDelta {
    pub buses: i64,
    pub taxis: i64,
    pub passengers: i64,
    pub delay_minutes: f64,
    pub revenue: i64,
}

impl LiveMetricsSnapshot {
    /// Apply a delta, keeping the delay at display precision and never below zero.
    /// Counts are left as-is; see `with_counts_floored`.
    pub fn apply(&self, delta: &MetricsDelta) -> Self {
        let delay = round_tenths(self.average_delay_minutes + delta.delay_minutes).max(0.0);
        Self {
            active_buses: self.active_buses.saturating_add(delta.buses),
            active_taxis: self.active_taxis.saturating_add(delta.taxis),
            total_passengers: self.total_passengers.saturating_add(delta.passengers),
            average_delay_minutes: delay,
            revenue: self.revenue.saturating_add(delta.revenue),
        }
    }

    pub fn with_counts_floored(self) -> Self {
        Self {
            active_buses: self.active_buses.max(0),
            active_taxis: self.active_taxis.max(0),
            total_passengers: self.total_passengers.max(0),
            ..self
        }
    }

    /// Names of count fields that are currently negative
    pub fn negative_counts(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.active_buses < 0 {
            fields.push("activeBuses");
        }
        if self.active_taxis < 0 {
            fields.push("activeTaxis");
        }
        if self.total_passengers < 0 {
            fields.push("totalPassengers");
        }
        fields
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_fixed_delta_to_seed() {
        let delta = MetricsDelta {
            buses: 3,
            taxis: -2,
            passengers: 50,
            delay_minutes: -0.2,
            revenue: 500,
        };

        let next = LiveMetricsSnapshot::default().apply(&delta);

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
    }

    #[test]
    fn test_delay_is_clamped_at_zero() {
        let snapshot = LiveMetricsSnapshot {
            average_delay_minutes: 0.1,
            ..Default::default()
        };
        let delta = MetricsDelta {
            delay_minutes: -50.0,
            ..Default::default()
        };

        assert_eq!(snapshot.apply(&delta).average_delay_minutes, 0.0);
    }

    #[test]
    fn test_counts_may_go_negative_unless_floored() {
        let snapshot = LiveMetricsSnapshot {
            active_buses: 1,
            active_taxis: 0,
            ..Default::default()
        };
        let delta = MetricsDelta {
            buses: -3,
            taxis: -2,
            ..Default::default()
        };

        let next = snapshot.apply(&delta);
        assert_eq!(next.active_buses, -2);
        assert_eq!(next.negative_counts(), vec!["activeBuses", "activeTaxis"]);

        let floored = next.with_counts_floored();
        assert_eq!(floored.active_buses, 0);
        assert_eq!(floored.active_taxis, 0);
        assert!(floored.negative_counts().is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(LiveMetricsSnapshot::default()).unwrap();
        assert_eq!(json["activeBuses"], 142);
        assert_eq!(json["averageDelayMinutes"], 2.8);
    }
}
