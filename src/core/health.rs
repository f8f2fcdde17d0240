//! Health Scorer: recency, emotional strength and volume → one normalized score
//!
//! - communication = clamp(1 - days / 30)
//! - emotional     = clamp(connection_strength)
//! - memory        = clamp(total / 50)
//! - overall       = mean of the three

use chrono::{DateTime, Utc};

use crate::config::{AnalyzerConfig, TierCutoffs};
use crate::core::frequency::{days_since, latest_date};
use crate::types::{HealthScore, HealthTier, InteractionRecord, RelationshipMetrics};

/// Relationship health scorer
#[derive(Debug, Clone)]
pub struct HealthScorer {
    communication_window_days: u32,
    memory_saturation: u32,
    tiers: TierCutoffs,
}

impl Default for HealthScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthScorer {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            communication_window_days: config.communication_window_days.max(1),
            memory_saturation: config.memory_saturation.max(1),
            tiers: config.tiers,
        }
    }

    /// Score already-derived metrics. Out-of-range inputs are clamped.
    pub fn score(&self, metrics: &RelationshipMetrics) -> HealthScore {
        let communication = unit(
            1.0 - metrics.last_interaction_days as f64 / self.communication_window_days as f64,
        );
        let emotional = unit(metrics.connection_strength);
        let memory = unit(metrics.total_memories as f64 / self.memory_saturation as f64);

        let overall = (communication + emotional + memory) / 3.0;
        let tier = HealthTier::classify(overall, &self.tiers);

        HealthScore {
            overall,
            communication,
            emotional,
            memory,
            tier,
            recommendations: tier.recommendations().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Derive metrics from records.
    ///
    /// With no records the gap is the full communication window, so the
    /// communication component is 0.
    pub fn metrics(
        &self,
        records: &[InteractionRecord],
        now: DateTime<Utc>,
        connection_strength: f64,
    ) -> RelationshipMetrics {
        let last_interaction_days = match latest_date(records) {
            Some(latest) => u32::try_from(days_since(now, latest)).unwrap_or(u32::MAX),
            None => self.communication_window_days,
        };

        RelationshipMetrics {
            last_interaction_days,
            connection_strength: unit(connection_strength),
            total_memories: u32::try_from(records.len()).unwrap_or(u32::MAX),
        }
    }
}

/// Clamp to [0, 1]; NaN becomes 0
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub fn score_health(metrics: &RelationshipMetrics) -> HealthScore {
    HealthScorer::new().score(metrics)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn metrics(days: u32, strength: f64, total: u32) -> RelationshipMetrics {
        RelationshipMetrics {
            last_interaction_days: days,
            connection_strength: strength,
            total_memories: total,
        }
    }

    #[test]
    fn test_overall_is_mean() {
        for (days, strength, total) in [(0, 1.0, 50), (7, 0.9, 4), (45, 0.2, 0), (12, 0.55, 80)] {
            let s = score_health(&metrics(days, strength, total));
            let mean = (s.communication + s.emotional + s.memory) / 3.0;
            assert!((s.overall - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reference_example() {
        let s = score_health(&metrics(7, 0.9, 4));
        assert!((s.communication - (1.0 - 7.0 / 30.0)).abs() < 1e-9);
        assert!((s.memory - 0.08).abs() < 1e-9);
        assert!((s.emotional - 0.9).abs() < 1e-9);
        assert!((s.overall - 0.582222).abs() < 1e-6);
        assert_eq!(s.tier, HealthTier::Fair);
    }

    #[test]
    fn test_communication_decays_to_zero() {
        assert_eq!(score_health(&metrics(30, 0.5, 10)).communication, 0.0);
        assert_eq!(score_health(&metrics(90, 0.5, 10)).communication, 0.0);
        assert_eq!(score_health(&metrics(0, 0.5, 10)).communication, 1.0);
    }

    #[test]
    fn test_memory_saturates() {
        assert_eq!(score_health(&metrics(0, 0.5, 50)).memory, 1.0);
        assert_eq!(score_health(&metrics(0, 0.5, 500)).memory, 1.0);
    }

    #[test]
    fn test_strength_clamped() {
        assert_eq!(score_health(&metrics(0, 1.7, 0)).emotional, 1.0);
        assert_eq!(score_health(&metrics(0, -0.3, 0)).emotional, 0.0);
        assert_eq!(score_health(&metrics(0, f64::NAN, 0)).emotional, 0.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(HealthTier::from_overall(1.0), HealthTier::Excellent);
        assert_eq!(HealthTier::from_overall(0.8), HealthTier::Excellent);
        assert_eq!(HealthTier::from_overall(0.7999), HealthTier::Good);
        assert_eq!(HealthTier::from_overall(0.6), HealthTier::Good);
        assert_eq!(HealthTier::from_overall(0.5999), HealthTier::Fair);
        assert_eq!(HealthTier::from_overall(0.4), HealthTier::Fair);
        assert_eq!(HealthTier::from_overall(0.3999), HealthTier::NeedsAttention);
        assert_eq!(HealthTier::from_overall(0.0), HealthTier::NeedsAttention);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let order = |t: HealthTier| match t {
            HealthTier::NeedsAttention => 0,
            HealthTier::Fair => 1,
            HealthTier::Good => 2,
            HealthTier::Excellent => 3,
        };
        let mut last = 0;
        for i in 0..=1000 {
            let rank = order(HealthTier::from_overall(i as f64 / 1000.0));
            assert!(rank >= last);
            last = rank;
        }
    }

    #[test]
    fn test_two_recommendations_per_tier() {
        let s = score_health(&metrics(60, 0.1, 1));
        assert_eq!(s.tier, HealthTier::NeedsAttention);
        assert_eq!(s.recommendations.len(), 2);
        assert!(s.recommendations.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn test_metrics_from_records() {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let records = vec![
            InteractionRecord::new("Mom", now - Duration::days(9), "Happy", ""),
            InteractionRecord::new("Mom", now - Duration::days(3), "Love", ""),
        ];
        let m = HealthScorer::new().metrics(&records, now, 0.75);
        assert_eq!(m.last_interaction_days, 3);
        assert_eq!(m.total_memories, 2);
        assert_eq!(m.connection_strength, 0.75);
    }

    #[test]
    fn test_metrics_without_records() {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let m = HealthScorer::new().metrics(&[], now, 0.5);
        assert_eq!(m.last_interaction_days, 30);
        assert_eq!(score_health(&m).communication, 0.0);
    }
}
