// Submission sink that writes each record to the diagnostic log
use crate::application::submission_sink::{SubmissionEvent, SubmissionSink};
use anyhow::Context;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct TracingSink;

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn record(&self, event: SubmissionEvent) -> anyhow::Result<()> {
        let record =
            serde_json::to_string(&event).context("Failed to serialize submission event")?;

        tracing::info!(
            target: "raah_transit::submissions",
            kind = ?event.kind,
            submitted_at = %event.submitted_at.to_rfc3339(),
            record = %record,
            "form submission received"
        );
        Ok(())
    }
}
