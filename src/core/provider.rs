//! Record provider boundary
//!
//! Fetching records is the only step that may suspend. The engine awaits the
//! fetch, then runs synchronously on the materialized records. Cancellation,
//! if wanted, belongs around the fetch.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::future::join_all;

use crate::core::PatternAggregator;
use crate::error::{InvalidRecordError, ProviderError};
use crate::types::{InteractionRecord, PatternReport, RawRecord};

/// Source of interaction records for a person
#[async_trait]
pub trait RecordProvider: Send + Sync {
    async fn fetch_records(&self, person: &str) -> Result<Vec<InteractionRecord>, ProviderError>;
}

/// One person to analyze in a batch
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub person: String,
    pub connection_strength: f64,
}

impl AnalysisRequest {
    pub fn new(person: impl Into<String>, connection_strength: f64) -> Self {
        Self {
            person: person.into(),
            connection_strength,
        }
    }
}

impl PatternAggregator {
    /// Fetch records from `provider`, then analyze them
    pub async fn analyze_from_provider<P>(
        &self,
        provider: &P,
        person: &str,
        now: DateTime<Utc>,
        connection_strength: f64,
    ) -> Result<PatternReport, ProviderError>
    where
        P: RecordProvider + ?Sized,
    {
        let records = provider.fetch_records(person).await.inspect_err(|e| {
            tracing::warn!(person, code = e.code(), "Record fetch failed: {}", e);
        })?;
        tracing::trace!(person, count = records.len(), "Fetched records");
        Ok(self.analyze(person, &records, now, connection_strength))
    }

    /// Analyze several people concurrently. Results keep request order and
    /// one failed fetch does not affect the others.
    pub async fn analyze_many<P>(
        &self,
        provider: &P,
        requests: &[AnalysisRequest],
        now: DateTime<Utc>,
    ) -> Vec<Result<PatternReport, ProviderError>>
    where
        P: RecordProvider + ?Sized,
    {
        join_all(requests.iter().map(|req| {
            self.analyze_from_provider(provider, &req.person, now, req.connection_strength)
        }))
        .await
    }
}

/// In-memory provider keyed by person
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    records: HashMap<String, Vec<InteractionRecord>>,
    consent: bool,
}

impl InMemoryProvider {
    /// Create an empty provider with consent granted
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            consent: true,
        }
    }

    /// Create a provider that refuses every fetch until consent is granted
    pub fn without_consent() -> Self {
        Self {
            records: HashMap::new(),
            consent: false,
        }
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn insert(&mut self, person: impl Into<String>, records: Vec<InteractionRecord>) {
        self.records.entry(person.into()).or_default().extend(records);
    }

    /// Validate and insert raw records. Nothing is inserted if any is invalid.
    pub fn insert_raw(
        &mut self,
        person: impl Into<String>,
        raw: Vec<RawRecord>,
    ) -> Result<(), InvalidRecordError> {
        let records = raw
            .into_iter()
            .map(InteractionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.insert(person, records);
        Ok(())
    }
}

#[async_trait]
impl RecordProvider for InMemoryProvider {
    async fn fetch_records(&self, person: &str) -> Result<Vec<InteractionRecord>, ProviderError> {
        if !self.consent {
            return Err(ProviderError::ConsentRequired {
                person: person.to_string(),
            });
        }
        Ok(self.records.get(person).cloned().unwrap_or_default())
    }
}
