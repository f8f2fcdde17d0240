//! Trend Analyzer: compares positive moods in the recent half vs the older half
//!
//! Records are sorted newest first before splitting, so input order never
//! matters. The recent half takes the extra record when the count is odd.

use crate::types::{EmotionalTrend, InteractionRecord};

/// Emotional trend analyzer
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Create new analyzer
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, records: &[InteractionRecord]) -> EmotionalTrend {
        // Insufficient data
        if records.len() < 2 {
            return EmotionalTrend::Stable;
        }

        let mut sorted: Vec<&InteractionRecord> = records.iter().collect();
        sorted.sort_by(|a, b| a.cmp_newest_first(b));

        let split = sorted.len().div_ceil(2);
        let (recent, older) = sorted.split_at(split);

        let recent_positive = count_positive(recent);
        let older_positive = count_positive(older);

        if recent_positive > older_positive {
            EmotionalTrend::Improving
        } else if recent_positive < older_positive {
            EmotionalTrend::Declining
        } else {
            EmotionalTrend::Stable
        }
    }
}

fn count_positive(records: &[&InteractionRecord]) -> usize {
    records.iter().filter(|r| r.mood.is_positive()).count()
}

pub fn classify_trend(records: &[InteractionRecord]) -> EmotionalTrend {
    TrendAnalyzer::new().classify(records)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    /// Build records from (days_ago, mood) pairs
    fn records(pairs: &[(i64, &str)]) -> Vec<InteractionRecord> {
        pairs
            .iter()
            .map(|(days, mood)| {
                InteractionRecord::new("Friend", now() - Duration::days(*days), *mood, "")
            })
            .collect()
    }

    #[test]
    fn test_fewer_than_two_is_stable() {
        assert_eq!(classify_trend(&[]), EmotionalTrend::Stable);
        assert_eq!(classify_trend(&records(&[(1, "Happy")])), EmotionalTrend::Stable);
    }

    #[test]
    fn test_improving() {
        let r = records(&[(1, "Happy"), (2, "Grateful"), (10, "Nostalgic"), (11, "Sad")]);
        assert_eq!(classify_trend(&r), EmotionalTrend::Improving);
    }

    #[test]
    fn test_declining() {
        let r = records(&[(1, "Sad"), (2, "Nostalgic"), (10, "Happy"), (11, "Excited")]);
        assert_eq!(classify_trend(&r), EmotionalTrend::Declining);
    }

    #[test]
    fn test_equal_counts_stable() {
        let r = records(&[(1, "Happy"), (2, "Sad"), (10, "Love"), (11, "Sad")]);
        assert_eq!(classify_trend(&r), EmotionalTrend::Stable);
    }

    #[test]
    fn test_sorts_before_splitting() {
        // Oldest first on input; positional split would say declining
        let r = records(&[(11, "Sad"), (10, "Nostalgic"), (2, "Grateful"), (1, "Happy")]);
        assert_eq!(classify_trend(&r), EmotionalTrend::Improving);
    }

    #[test]
    fn test_odd_count_recent_takes_ceiling() {
        // recent = 2 newest, older = 1
        let r = records(&[(1, "Sad"), (2, "Happy"), (3, "Happy")]);
        assert_eq!(classify_trend(&r), EmotionalTrend::Stable);
    }

    #[test]
    fn test_reversal_invariant_with_date_ties() {
        let mut r = records(&[(5, "Happy"), (5, "Sad"), (5, "Grateful"), (9, "Calm")]);
        let forward = classify_trend(&r);
        r.reverse();
        assert_eq!(classify_trend(&r), forward);
    }
}
