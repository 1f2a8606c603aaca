use crate::application::delta_source::DeltaBounds;
use crate::domain::metrics::LiveMetricsSnapshot;
use anyhow::ensure;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub simulator: SimulatorSettings,
    pub submissions: SubmissionSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulatorSettings {
    pub interval_ms: u64,
    /// Fixed RNG seed for reproducible sessions; entropy when unset
    pub seed: Option<u64>,
    pub clamp_counts: bool,
    pub initial: LiveMetricsSnapshot,
    pub bounds: DeltaBounds,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            seed: None,
            clamp_counts: false,
            initial: LiveMetricsSnapshot::default(),
            bounds: DeltaBounds::default(),
        }
    }
}

impl SimulatorSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.interval_ms > 0, "simulator.interval_ms must be greater than zero");
        ensure!(
            self.initial.average_delay_minutes.is_finite(),
            "simulator.initial.averageDelayMinutes must be finite"
        );

        let b = &self.bounds;
        for (field, bound) in [
            ("buses", b.buses),
            ("taxis", b.taxis),
            ("passengers", b.passengers),
            ("revenue", b.revenue),
        ] {
            ensure!(
                bound >= 0,
                "simulator.bounds.{} must not be negative, got {}",
                field,
                bound
            );
        }
        ensure!(
            b.delay_minutes.is_finite() && b.delay_minutes >= 0.0,
            "simulator.bounds.delay_minutes must be a finite non-negative number, got {}",
            b.delay_minutes
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SubmissionSettings {
    pub latency_ms: u64,
    pub platform: String,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            platform: "Raah Web App".to_string(),
        }
    }
}

impl SubmissionSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl AppConfig {
    /// Reject values that would only fail once a dashboard view opens
    pub fn validate(&self) -> anyhow::Result<()> {
        self.simulator.validate()
    }
}

/// Optional `config/raah.*` file, overridden by `RAAH_SECTION__KEY` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/raah").required(false))
        .add_source(
            config::Environment::with_prefix("RAAH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_values() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.simulator.interval(), Duration::from_secs(3));
        assert_eq!(config.simulator.initial.active_buses, 142);
        assert_eq!(config.simulator.bounds.revenue, 500);
        assert_eq!(config.submissions.latency(), Duration::from_secs(1));
        assert_eq!(config.submissions.platform, "Raah Web App");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [simulator]
            seed = 7
            clamp_counts = true

            [simulator.bounds]
            buses = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.simulator.seed, Some(7));
        assert!(config.simulator.clamp_counts);
        assert_eq!(config.simulator.bounds.buses, 10);
        assert_eq!(config.simulator.bounds.taxis, 2);
        assert_eq!(config.simulator.interval_ms, 3000);
    }

    #[test]
    fn test_shipped_config_file_parses() {
        let raw = include_str!("../../config/raah.toml");
        let config: AppConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.submissions.latency_ms, 1000);
        assert_eq!(config.simulator.initial, LiveMetricsSnapshot::default());
    }

    #[test]
    fn test_defaults_and_shipped_file_validate() {
        AppConfig::default().validate().unwrap();

        let shipped: AppConfig = toml::from_str(include_str!("../../config/raah.toml")).unwrap();
        shipped.validate().unwrap();
    }

    fn rejected(edit: impl FnOnce(&mut SimulatorSettings)) -> String {
        let mut config = AppConfig::default();
        edit(&mut config.simulator);
        config.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = rejected(|s| s.interval_ms = 0);
        assert!(err.contains("interval_ms"), "{}", err);
    }

    #[test]
    fn test_unrepresentable_bound_is_rejected() {
        let err = rejected(|s| s.bounds.buses = i64::MIN);
        assert!(err.contains("bounds.buses"), "{}", err);

        let err = rejected(|s| s.bounds.revenue = -1);
        assert!(err.contains("bounds.revenue"), "{}", err);
    }

    #[test]
    fn test_bad_delay_bound_is_rejected() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, -0.2] {
            let err = rejected(|s| s.bounds.delay_minutes = value);
            assert!(err.contains("bounds.delay_minutes"), "{}", err);
        }
    }

    #[test]
    fn test_non_finite_initial_delay_is_rejected() {
        let err = rejected(|s| s.initial.average_delay_minutes = f64::NAN);
        assert!(err.contains("averageDelayMinutes"), "{}", err);
    }

    #[test]
    fn test_out_of_range_bound_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [simulator.bounds]
            passengers = 9223372036854775808
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 3000);
    }
}
