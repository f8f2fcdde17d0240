//! Interaction records
//!
//! `InteractionRecord` is the typed, immutable form the engine reads.
//! `RawRecord` is what a provider hands over before validation.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidRecordError, RecordField};
use crate::types::Mood;

/// One logged interaction with a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub content: String,
    pub person: String,
}

impl InteractionRecord {
    pub fn new(
        person: impl Into<String>,
        date: DateTime<Utc>,
        mood: impl Into<Mood>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date,
            mood: mood.into(),
            content: content.into(),
            person: person.into(),
        }
    }

    /// Total order, newest first. Records with equal dates fall back to
    /// mood label, content, then person so the order never depends on input
    /// position.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| self.mood.label().cmp(other.mood.label()))
            .then_with(|| self.content.cmp(&other.content))
            .then_with(|| self.person.cmp(&other.person))
    }
}

/// Untyped record as delivered by a provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: Option<String>,
    pub mood: Option<String>,
    pub content: Option<String>,
    pub person: Option<String>,
}

impl TryFrom<RawRecord> for InteractionRecord {
    type Error = InvalidRecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let person = raw
            .person
            .ok_or_else(|| InvalidRecordError::missing(RecordField::Person))?;
        if person.trim().is_empty() {
            return Err(InvalidRecordError::invalid(RecordField::Person, "empty"));
        }

        let date = match raw.date {
            Some(s) if !s.trim().is_empty() => DateTime::parse_from_rfc3339(s.trim())
                .map_err(|e| {
                    InvalidRecordError::invalid(RecordField::Date, format!("not RFC 3339: {}", e))
                })?
                .with_timezone(&Utc),
            _ => return Err(InvalidRecordError::missing(RecordField::Date)),
        };

        let mood = match raw.mood {
            Some(s) if !s.trim().is_empty() => Mood::new(s),
            _ => return Err(InvalidRecordError::missing(RecordField::Mood)),
        };

        let content = raw
            .content
            .ok_or_else(|| InvalidRecordError::missing(RecordField::Content))?;

        Ok(Self {
            date,
            mood,
            content,
            person,
        })
    }
}
