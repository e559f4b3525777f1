//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections raised by roster operations.
///
/// None of these leave the roster modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

impl RosterError {
    /// Whether the error refers to an activity that does not exist,
    /// as opposed to a conflict with the current participants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActivityNotFound(_))
    }
}

/// Problems found while building a roster from seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Activity {0:?} appears more than once")]
    DuplicateActivity(String),
    #[error("Activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),
    #[error("{email} is listed twice in {activity:?}")]
    DuplicateParticipant { activity: String, email: String },
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
