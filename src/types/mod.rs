//! Core types for Rapport

mod emotion;
mod record;
mod cadence;
mod health;
mod suggestion;
mod report;

pub use emotion::{EmotionType, Mood, map_mood_label};
pub use record::{InteractionRecord, RawRecord};
pub use cadence::{InteractionFrequency, EmotionalTrend, Urgency};
pub use health::{RelationshipMetrics, HealthScore, HealthTier};
pub use suggestion::{Suggestion, SuggestionType};
pub use report::{PatternReport, LastInteraction, NEVER};
