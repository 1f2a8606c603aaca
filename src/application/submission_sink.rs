// Sink trait for submitted form records
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Contact,
    Feedback,
    TaxiBooking,
}

/// Diagnostic record of one submission. No schema guarantee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEvent {
    pub kind: SubmissionKind,
    pub submitted_at: DateTime<Utc>,
    pub fields: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub platform: String,
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn record(&self, event: SubmissionEvent) -> anyhow::Result<()>;
}
