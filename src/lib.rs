//! Rapport: relationship-memory analytics engine
//!
//! records → FrequencyClassifier & TrendAnalyzer → HealthScorer
//!         → SuggestionRanker → PatternAggregator → PatternReport
//!
//! Every entry point is a pure function of its arguments. `now` is always
//! passed in, never read from the wall clock.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::config::AnalyzerConfig;
pub use crate::core::{analyze, analyze_raw, PatternAggregator};
pub use crate::error::{ConfigError, InvalidRecordError, ProviderError, RapportError};

// =============================================================================
// CADENCE BANDS [C] - upper bound of each band, inclusive
// =============================================================================

/// 0..=7 days since the last record → frequent
pub const FREQUENT_MAX_DAYS: i64 = 7;

/// 8..=14 days → regular
pub const REGULAR_MAX_DAYS: i64 = 14;

/// 15..=30 days → occasional, anything above → rare
pub const OCCASIONAL_MAX_DAYS: i64 = 30;

// =============================================================================
// HEALTH SCORING [C]
// =============================================================================

/// Communication decays linearly to 0 over this many days of silence
pub const COMMUNICATION_WINDOW_DAYS: u32 = 30;

/// Memory score saturates at this many recorded memories
pub const MEMORY_SATURATION: u32 = 50;

/// overall >= 0.8 → excellent
pub const TIER_EXCELLENT_MIN: f64 = 0.8;

/// overall >= 0.6 → good
pub const TIER_GOOD_MIN: f64 = 0.6;

/// overall >= 0.4 → fair, below → needs attention
pub const TIER_FAIR_MIN: f64 = 0.4;

// =============================================================================
// SUGGESTION IMPACTS [C]
// =============================================================================

pub const IMPACT_CALL: f64 = 0.8;
pub const IMPACT_MESSAGE: f64 = 0.7;
pub const IMPACT_MEMORY: f64 = 0.9;

// =============================================================================
// REPORT
// =============================================================================

/// Dominant emotion label when there are no records
pub const NEUTRAL_EMOTION: &str = "Neutral";

pub const VERSION: &str = "1.0.0";
