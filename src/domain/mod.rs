// Domain layer - Plain data types and rules, no I/O
pub mod content;
pub mod forms;
pub mod metrics;
pub mod routes;
pub mod taxi;
