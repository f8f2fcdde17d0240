//! Frequency Classifier: maps recency of the latest record to a cadence band
//!
//! Bands (inclusive lower bound, whole days since the newest record):
//! - 0..=7   → frequent
//! - 8..=14  → regular
//! - 15..=30 → occasional
//! - > 30    → rare
//!
//! No records → rare.

use chrono::{DateTime, Utc};

use crate::config::CadenceBands;
use crate::types::{InteractionFrequency, InteractionRecord};

/// Cadence classifier
#[derive(Debug, Clone, Default)]
pub struct FrequencyClassifier {
    bands: CadenceBands,
}

impl FrequencyClassifier {
    /// Create classifier with default bands
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bands(bands: CadenceBands) -> Self {
        Self { bands }
    }

    /// Classify a record sequence in any order
    pub fn classify(
        &self,
        records: &[InteractionRecord],
        now: DateTime<Utc>,
    ) -> InteractionFrequency {
        match latest_date(records) {
            Some(latest) => self.classify_days(days_since(now, latest)),
            None => InteractionFrequency::Rare,
        }
    }

    /// Classify a whole-day gap directly
    pub fn classify_days(&self, days: i64) -> InteractionFrequency {
        if days <= self.bands.frequent_max_days {
            InteractionFrequency::Frequent
        } else if days <= self.bands.regular_max_days {
            InteractionFrequency::Regular
        } else if days <= self.bands.occasional_max_days {
            InteractionFrequency::Occasional
        } else {
            InteractionFrequency::Rare
        }
    }
}

/// Newest date among the records
pub fn latest_date(records: &[InteractionRecord]) -> Option<DateTime<Utc>> {
    records.iter().map(|r| r.date).max()
}

/// Whole days from `date` to `now`, floored. Future dates count as 0.
pub fn days_since(now: DateTime<Utc>, date: DateTime<Utc>) -> i64 {
    (now - date).num_days().max(0)
}

/// Classify with the default bands
pub fn classify_frequency(records: &[InteractionRecord], now: DateTime<Utc>) -> InteractionFrequency {
    FrequencyClassifier::new().classify(records, now)
}

// =============================================================================
// TESTS
// =============================================================================
