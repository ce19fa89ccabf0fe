//! Liveness descriptor for the assistant.

use serde::Serialize;

use crate::chat::now_timestamp;

/// Service name reported by [`check_health`].
pub const SERVICE_NAME: &str = "Smart Keyword-Based Assistant";

/// Status line reported while the service is up.
pub const RUNNING_STATUS: &str = "✅ Chatbot is running!";

/// Topic categories the assistant advertises.
pub const FEATURES: [&str; 6] = [
    "Study Groups",
    "Teacher Information",
    "College Clubs",
    "Transport",
    "Alumni Connect",
    "Important Contacts",
];

/// Static capability descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// Human-readable status line.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Advertised topic categories.
    pub features: Vec<String>,
    /// Whether replies are produced without external dependencies.
    pub reliable: bool,
    /// ISO 8601 timestamp of this report.
    pub timestamp: String,
}

/// Build the health descriptor.
pub fn check_health() -> HealthReport {
    HealthReport {
        status: RUNNING_STATUS.to_owned(),
        service: SERVICE_NAME.to_owned(),
        features: FEATURES.iter().map(|f| (*f).to_owned()).collect(),
        reliable: true,
        timestamp: now_timestamp(),
    }
}
