//! Core engines for Rapport

pub mod frequency;
pub mod trend;
pub mod health;
pub mod suggestions;
pub mod patterns;
pub mod provider;

pub use frequency::{FrequencyClassifier, classify_frequency};
pub use trend::{TrendAnalyzer, classify_trend};
pub use health::{HealthScorer, score_health};
pub use suggestions::{SuggestionRanker, rank_suggestions};
pub use patterns::{PatternAggregator, analyze, analyze_raw, dominant_emotion};
pub use provider::{RecordProvider, InMemoryProvider, AnalysisRequest};
