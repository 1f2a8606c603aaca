// Submission service - Use case for contact, feedback and taxi booking forms
use crate::application::catalog_service::CatalogService;
use crate::application::submission_sink::{SubmissionEvent, SubmissionKind, SubmissionSink};
use crate::domain::forms::{ContactForm, FeedbackForm, TaxiBookingRequest, ValidationError};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const BOOKING_NOTE: &str = "Simulated booking - no actual reservation made";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid submission: {0}")]
    Invalid(#[from] ValidationError),
    #[error("unknown taxi route: {0}")]
    UnknownRoute(String),
    #[error("failed to record submission: {0}")]
    Sink(#[source] anyhow::Error),
}

/// User-visible confirmation shown after a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgment {
    pub title: String,
    pub description: String,
}

impl Acknowledgment {
    fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Clone)]
pub struct SubmissionService {
    sink: Arc<dyn SubmissionSink>,
    catalog: CatalogService,
    latency: Duration,
    platform: String,
}

impl SubmissionService {
    pub fn new(
        sink: Arc<dyn SubmissionSink>,
        catalog: CatalogService,
        latency: Duration,
        platform: String,
    ) -> Self {
        Self {
            sink,
            catalog,
            latency,
            platform,
        }
    }

    /// On success the form is reset to its empty default; on failure it is left as submitted.
    pub async fn submit_contact(
        &self,
        form: &mut ContactForm,
    ) -> Result<Acknowledgment, SubmissionError> {
        form.validate()?;

        let fields = to_fields(&*form)?;
        self.deliver(SubmissionKind::Contact, fields, None).await?;
        *form = ContactForm::default();

        Ok(Acknowledgment::new(
            "Message Sent Successfully!",
            "Thank you for contacting us. We'll get back to you soon.",
        ))
    }

    pub async fn submit_feedback(
        &self,
        form: &mut FeedbackForm,
        user_agent: Option<String>,
    ) -> Result<Acknowledgment, SubmissionError> {
        form.validate()?;

        let fields = to_fields(&*form)?;
        self.deliver(SubmissionKind::Feedback, fields, user_agent)
            .await?;
        *form = FeedbackForm::default();

        Ok(Acknowledgment::new(
            "Feedback Submitted Successfully!",
            "Thank you for helping us improve Raah. Your feedback is valuable to us.",
        ))
    }

    pub async fn book_taxi(
        &self,
        request: &mut TaxiBookingRequest,
    ) -> Result<Acknowledgment, SubmissionError> {
        request.validate()?;

        let route = self
            .catalog
            .taxi_route(&request.route_id)
            .cloned()
            .ok_or_else(|| SubmissionError::UnknownRoute(request.route_id.clone()))?;

        let fields = serde_json::json!({
            "routeId": route.id,
            "pickup": route.pickup,
            "drop": route.drop,
            "estimatedFare": route.fare,
            "customerNote": BOOKING_NOTE,
        });
        self.deliver(SubmissionKind::TaxiBooking, fields, None)
            .await?;
        *request = TaxiBookingRequest::default();

        Ok(Acknowledgment::new(
            "Booking Simulated!",
            format!(
                "Taxi from {} to {} - Check console for details.",
                route.pickup, route.drop
            ),
        ))
    }

    /// Simulated round-trip followed by a write to the sink
    async fn deliver(
        &self,
        kind: SubmissionKind,
        fields: serde_json::Value,
        user_agent: Option<String>,
    ) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.latency).await;

        let event = SubmissionEvent {
            kind,
            submitted_at: Utc::now(),
            fields,
            user_agent,
            platform: self.platform.clone(),
        };

        self.sink.record(event).await.map_err(|e| {
            tracing::error!(?kind, error = %e, "submission sink failed");
            SubmissionError::Sink(e)
        })?;

        tracing::debug!(?kind, "submission recorded");
        Ok(())
    }
}

fn to_fields<T: Serialize>(form: &T) -> Result<serde_json::Value, SubmissionError> {
    serde_json::to_value(form).map_err(|e| SubmissionError::Sink(e.into()))
}
