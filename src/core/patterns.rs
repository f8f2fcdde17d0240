//! Pattern Aggregator: the single entry point the presentation layer calls
//!
//! records → cadence + trend → metrics → health → suggestions → PatternReport
//!
//! Pure: the same arguments always produce the same report. `now` is an
//! argument, never read from the clock.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::config::AnalyzerConfig;
use crate::core::{FrequencyClassifier, HealthScorer, SuggestionRanker, TrendAnalyzer};
use crate::error::{ConfigError, InvalidRecordError};
use crate::types::{InteractionRecord, LastInteraction, PatternReport, RawRecord, map_mood_label};
use crate::NEUTRAL_EMOTION;

/// Fallback subject for the message suggestion when there is nothing to reference
const NO_MEMORY_TEXT: &str = "your time together";

/// Fallback date label for the photo suggestion
const NO_MEMORY_DATE: &str = "a favourite moment together";

/// Orchestrates the classifiers, scorer and ranker
#[derive(Debug, Clone)]
pub struct PatternAggregator {
    frequency: FrequencyClassifier,
    trend: TrendAnalyzer,
    health: HealthScorer,
    ranker: SuggestionRanker,
}

impl Default for PatternAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternAggregator {
    pub fn new() -> Self {
        Self::from_validated(AnalyzerConfig::default())
    }

    /// Build from a config, rejecting it if it fails validation
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: AnalyzerConfig) -> Self {
        Self {
            frequency: FrequencyClassifier::with_bands(config.cadence),
            trend: TrendAnalyzer::new(),
            health: HealthScorer::from_config(&config),
            ranker: SuggestionRanker::with_impacts(config.impacts),
        }
    }

    /// Build the report for one person
    pub fn analyze(
        &self,
        person_name: &str,
        records: &[InteractionRecord],
        now: DateTime<Utc>,
        connection_strength: f64,
    ) -> PatternReport {
        let interaction_frequency = self.frequency.classify(records, now);
        let emotional_trend = self.trend.classify(records);
        let dominant_emotion = dominant_emotion(records);

        let metrics = self.health.metrics(records, now, connection_strength);
        let health_score = self.health.score(&metrics);

        let newest = records.iter().min_by(|a, b| a.cmp_newest_first(b));
        let last_memory = newest
            .map(|r| r.content.trim())
            .filter(|c| !c.is_empty())
            .unwrap_or(NO_MEMORY_TEXT);
        let memory_date_label = newest
            .map(|r| r.date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| NO_MEMORY_DATE.to_string());

        let suggestions = self.ranker.rank(
            person_name,
            last_memory,
            &memory_date_label,
            interaction_frequency.urgency(),
        );

        let reconnection_hint = map_mood_label(&dominant_emotion)
            .map(|e| e.reconnection_hint().to_string());

        tracing::debug!(
            person = person_name,
            records = records.len(),
            frequency = %interaction_frequency,
            trend = %emotional_trend,
            overall = health_score.overall,
            tier = %health_score.tier,
            "Pattern analysis complete"
        );

        PatternReport {
            person_name: person_name.to_string(),
            total_entries: records.len(),
            dominant_emotion,
            interaction_frequency,
            emotional_trend,
            last_interaction: LastInteraction::from(newest.map(|r| r.date)),
            metrics,
            health_score,
            suggestions,
            reconnection_hint,
        }
    }

    /// Validate provider records, then analyze. The first bad record aborts.
    pub fn analyze_raw(
        &self,
        person_name: &str,
        raw: Vec<RawRecord>,
        now: DateTime<Utc>,
        connection_strength: f64,
    ) -> Result<PatternReport, InvalidRecordError> {
        let records = raw
            .into_iter()
            .map(InteractionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| {
                tracing::warn!(person = person_name, code = e.code(), "Rejected record: {}", e);
            })?;
        Ok(self.analyze(person_name, &records, now, connection_strength))
    }
}

/// Most frequent mood label.
///
/// Ties go to the label whose emotion is declared earliest in the
/// vocabulary; unknown moods rank after every known one, then by label text.
pub fn dominant_emotion(records: &[InteractionRecord]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.mood.label()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .min_by_key(|(label, count)| {
            let rank = map_mood_label(label)
                .map(|e| e.rank())
                .unwrap_or(usize::MAX);
            (Reverse(*count), rank, *label)
        })
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| NEUTRAL_EMOTION.to_string())
}

/// Analyze with the default configuration
pub fn analyze(
    person_name: &str,
    records: &[InteractionRecord],
    now: DateTime<Utc>,
    connection_strength: f64,
) -> PatternReport {
    PatternAggregator::new().analyze(person_name, records, now, connection_strength)
}

/// Validate raw provider records and analyze with the default configuration
pub fn analyze_raw(
    person_name: &str,
    raw: Vec<RawRecord>,
    now: DateTime<Utc>,
    connection_strength: f64,
) -> Result<PatternReport, InvalidRecordError> {
    PatternAggregator::new().analyze_raw(person_name, raw, now, connection_strength)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordField;
    use crate::types::{EmotionType, EmotionalTrend, HealthTier, InteractionFrequency};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn record(days: i64, mood: &str, content: &str) -> InteractionRecord {
        InteractionRecord::new("Mom", now() - Duration::days(days), mood, content)
    }

    #[test]
    fn test_empty_records() {
        let report = analyze("Mom", &[], now(), 0.5);
        assert_eq!(report.total_entries, 0);
        assert_eq!(report.dominant_emotion, "Neutral");
        assert_eq!(report.interaction_frequency, InteractionFrequency::Rare);
        assert_eq!(report.emotional_trend, EmotionalTrend::Stable);
        assert!(report.last_interaction.is_never());
        assert_eq!(report.suggestions.len(), 3);
        assert_eq!(report.reconnection_hint, None);
    }

    #[test]
    fn test_dominant_emotion_by_count() {
        let records = vec![
            record(1, "Nostalgic", ""),
            record(2, "Happy", ""),
            record(3, "Happy", ""),
        ];
        assert_eq!(dominant_emotion(&records), "Happy");
    }

    #[test]
    fn test_dominant_emotion_tie_uses_vocabulary_order() {
        // Comfort declared after Gratitude
        let records = vec![record(1, "Calm", ""), record(2, "Grateful", "")];
        assert_eq!(dominant_emotion(&records), "Grateful");
    }

    #[test]
    fn test_dominant_emotion_unknown_loses_ties() {
        let records = vec![record(1, "Anxious", ""), record(2, "Comfort", "")];
        assert_eq!(dominant_emotion(&records), "Comfort");
    }

    #[test]
    fn test_message_references_newest_content() {
        let records = vec![
            record(20, "Happy", "Weekend trip together"),
            record(4, "Love", "Birthday celebration"),
        ];
        let report = analyze("Mom", &records, now(), 0.8);
        let message = report
            .suggestions
            .iter()
            .find(|s| s.content.starts_with("Send"))
            .unwrap();
        assert_eq!(message.content, "Send a thoughtful message about Birthday celebration");
        assert_eq!(report.last_interaction.timestamp(), Some(now() - Duration::days(4)));
    }

    #[test]
    fn test_memory_date_label() {
        let records = vec![record(30, "Happy", "Dinner")];
        let report = analyze("Mom", &records, now(), 0.8);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.content == "Share a photo from May 31, 2024"));
    }

    #[test]
    fn test_reconnection_hint_from_dominant_emotion() {
        let report = analyze("Mom", &[record(2, "Grateful", "Call")], now(), 0.8);
        assert_eq!(
            report.reconnection_hint.as_deref(),
            Some(EmotionType::Gratitude.reconnection_hint())
        );
    }

    #[test]
    fn test_custom_config_flows_through() {
        let mut config = AnalyzerConfig::default();
        config.memory_saturation = 2;
        let aggregator = PatternAggregator::with_config(config).unwrap();
        let records = vec![record(0, "Happy", ""), record(1, "Happy", "")];
        let report = aggregator.analyze("Mom", &records, now(), 1.0);
        assert_eq!(report.health_score.memory, 1.0);
        assert_eq!(report.health_score.tier, HealthTier::Excellent);
    }

    #[test]
    fn test_with_config_rejects_unordered_tiers() {
        let mut config = AnalyzerConfig::default();
        config.tiers.good = 0.9;
        let err = PatternAggregator::with_config(config).unwrap_err();
        assert_eq!(err.code(), "R201_CONFIG_INVALID_VALUE");
    }

    #[test]
    fn test_analyze_raw_rejects_missing_date() {
        let raw = vec![
            RawRecord {
                date: Some("2024-06-20T09:00:00Z".to_string()),
                mood: Some("Happy".to_string()),
                content: Some("Lunch".to_string()),
                person: Some("Mom".to_string()),
            },
            RawRecord {
                date: None,
                mood: Some("Happy".to_string()),
                content: Some("Lunch".to_string()),
                person: Some("Mom".to_string()),
            },
        ];
        let err = analyze_raw("Mom", raw, now(), 0.5).unwrap_err();
        assert_eq!(err.field, RecordField::Date);
    }

    #[test]
    #[traced_test]
    fn test_logs_summary() {
        analyze("Mom", &[record(3, "Happy", "")], now(), 0.5);
        assert!(logs_contain("Pattern analysis complete"));
    }
}
