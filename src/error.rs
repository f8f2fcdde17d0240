//! Error types for Rapport.
//!
//! The engine itself cannot fail on well-typed input. Errors only come from
//! the edges: raw records that break the provider contract, bad config, and
//! the upstream fetch.

use serde::{Deserialize, Serialize};

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum RapportError {
    #[error("Invalid record: {0}")]
    Record(#[from] InvalidRecordError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl RapportError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Record(e) => e.code(),
            Self::Config(e) => e.code(),
            Self::Provider(e) => e.code(),
        }
    }
}

/// Field of an interaction record named by a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Date,
    Mood,
    Content,
    Person,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Mood => "mood",
            Self::Content => "content",
            Self::Person => "person",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record handed over by the provider violates the record contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field `{field}`: {message}")]
pub struct InvalidRecordError {
    pub field: RecordField,
    pub message: String,
}

impl InvalidRecordError {
    pub fn missing(field: RecordField) -> Self {
        Self {
            field,
            message: "missing".to_string(),
        }
    }

    pub fn invalid(field: RecordField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Reason code string (for logging)
    pub fn code(&self) -> &'static str {
        match self.field {
            RecordField::Date => "R101_RECORD_INVALID_DATE",
            RecordField::Mood => "R102_RECORD_INVALID_MOOD",
            RecordField::Content => "R103_RECORD_INVALID_CONTENT",
            RecordField::Person => "R104_RECORD_INVALID_PERSON",
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "R201_CONFIG_INVALID_VALUE",
            Self::Parse(_) => "R202_CONFIG_PARSE",
        }
    }
}

/// Failures of the upstream record fetch.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Record source unavailable: {0}")]
    Unavailable(String),

    #[error("Consent required before reading records for {person}")]
    ConsentRequired { person: String },

    #[error(transparent)]
    Record(#[from] InvalidRecordError),
}

impl ProviderError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "R301_PROVIDER_UNAVAILABLE",
            Self::ConsentRequired { .. } => "R302_PROVIDER_CONSENT_REQUIRED",
            Self::Record(e) => e.code(),
        }
    }
}
