// Form records submitted from the contact, feedback and taxi pages
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            reason: "is required",
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackCategory {
    BusService,
    TaxiService,
    AppUsability,
    RoutePlanning,
    RealTimeUpdates,
    BookingSystem,
    Payment,
    CustomerSupport,
    General,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 9] = [
        Self::BusService,
        Self::TaxiService,
        Self::AppUsability,
        Self::RoutePlanning,
        Self::RealTimeUpdates,
        Self::BookingSystem,
        Self::Payment,
        Self::CustomerSupport,
        Self::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::BusService => "Bus Service",
            Self::TaxiService => "Taxi Service",
            Self::AppUsability => "App Usability",
            Self::RoutePlanning => "Route Planning",
            Self::RealTimeUpdates => "Real-time Updates",
            Self::BookingSystem => "Booking System",
            Self::Payment => "Payment Issues",
            Self::CustomerSupport => "Customer Support",
            Self::General => "General Feedback",
        }
    }
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Public feedback. `rating` is 0 until the user picks a star.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackForm {
    pub name: String,
    pub email: Option<String>,
    pub category: Option<FeedbackCategory>,
    pub rating: u8,
    pub subject: String,
    pub feedback: String,
    pub suggestion: Option<String>,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        if self.category.is_none() {
            return Err(ValidationError::required("category"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError {
                field: "rating",
                reason: "must be between 1 and 5",
            });
        }
        require("subject", &self.subject)?;
        require("feedback", &self.feedback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxiBookingRequest {
    pub route_id: String,
}

impl TaxiBookingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("routeId", &self.route_id)
    }
}
