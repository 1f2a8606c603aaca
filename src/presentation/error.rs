// API errors and the notification payloads shown to users
use crate::application::metrics_simulator::SimulatorError;
use crate::application::submission_service::{Acknowledgment, SubmissionError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

/// Toast-style notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn destructive(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

impl From<Acknowledgment> for Notification {
    fn from(ack: Acknowledgment) -> Self {
        Self {
            title: ack.title,
            description: ack.description,
            variant: Variant::Default,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    notification: Notification,
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("malformed request body: {0}")]
    Payload(#[from] JsonRejection),
    #[error("invalid {field} filter: {value}")]
    BadFilter { field: &'static str, value: String },
    #[error("live metrics unavailable: {0}")]
    Simulator(#[from] SimulatorError),
    #[error("failed to encode response")]
    Encoding(StatusCode),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Submission(SubmissionError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Submission(SubmissionError::UnknownRoute(_)) => StatusCode::NOT_FOUND,
            Self::Submission(SubmissionError::Sink(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Payload(rejection) => rejection.status(),
            Self::BadFilter { .. } => StatusCode::BAD_REQUEST,
            Self::Simulator(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Encoding(status) => *status,
        }
    }

    fn notification(&self) -> Notification {
        match self {
            Self::Submission(SubmissionError::Invalid(v)) => Notification::destructive(v.to_string()),
            Self::Payload(rejection) => Notification::destructive(rejection.body_text()),
            Self::Submission(SubmissionError::UnknownRoute(_)) | Self::BadFilter { .. } => {
                Notification::destructive(self.to_string())
            }
            _ => Notification::destructive(GENERIC_FAILURE),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            notification: self.notification(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forms::ValidationError;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::from(SubmissionError::Invalid(ValidationError {
            field: "rating",
            reason: "must be between 1 and 5",
        }));
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(invalid.notification().description, "rating: must be between 1 and 5");

        let sink = ApiError::from(SubmissionError::Sink(anyhow::anyhow!("down")));
        assert_eq!(sink.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(sink.notification().description, GENERIC_FAILURE);
        assert_eq!(sink.notification().variant, Variant::Destructive);

        let missing = ApiError::from(SubmissionError::UnknownRoute("TX-404".to_string()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let filter = ApiError::BadFilter {
            field: "area",
            value: "moon".to_string(),
        };
        assert_eq!(filter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(filter.notification().description, "invalid area filter: moon");
    }
}
