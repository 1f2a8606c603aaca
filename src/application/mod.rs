// Application layer - Use cases and the ports they depend on
pub mod catalog_service;
pub mod delta_source;
pub mod live_metrics_service;
pub mod metrics_simulator;
pub mod submission_service;
pub mod submission_sink;
