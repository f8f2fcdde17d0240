//! Suggestion Ranker: one candidate per action type, sorted by estimated impact
//!
//! The sort is stable, so equal impacts keep declaration order
//! (call, message, memory).

use crate::config::SuggestionImpacts;
use crate::types::{Suggestion, SuggestionType, Urgency};

/// Reconnection suggestion ranker
#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    impacts: SuggestionImpacts,
}

impl SuggestionRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_impacts(impacts: SuggestionImpacts) -> Self {
        Self { impacts }
    }

    /// Generate and rank the three candidates
    pub fn rank(
        &self,
        person_name: &str,
        last_memory: &str,
        memory_date_label: &str,
        urgency: Urgency,
    ) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = SuggestionType::ALL
            .iter()
            .map(|&kind| Suggestion {
                suggestion_type: kind,
                content: content(kind, person_name, last_memory, memory_date_label),
                reasoning: reasoning(kind, urgency).to_string(),
                urgency,
                estimated_impact: self.impact(kind),
            })
            .collect();

        suggestions.sort_by(|a, b| b.estimated_impact.total_cmp(&a.estimated_impact));
        suggestions
    }

    fn impact(&self, kind: SuggestionType) -> f64 {
        let raw = match kind {
            SuggestionType::Call => self.impacts.call,
            SuggestionType::Message => self.impacts.message,
            SuggestionType::Memory => self.impacts.memory,
        };
        if raw.is_nan() {
            0.0
        } else {
            // + 0.0 folds -0.0 into 0.0 so total_cmp sees equal impacts as ties
            raw.clamp(0.0, 1.0) + 0.0
        }
    }
}

fn content(kind: SuggestionType, person_name: &str, last_memory: &str, memory_date_label: &str) -> String {
    match kind {
        SuggestionType::Call => format!("Give {} a call to catch up", person_name),
        SuggestionType::Message => format!("Send a thoughtful message about {}", last_memory),
        SuggestionType::Memory => format!("Share a photo from {}", memory_date_label),
    }
}

fn reasoning(kind: SuggestionType, urgency: Urgency) -> &'static str {
    match (kind, urgency) {
        (SuggestionType::Call, Urgency::High) => "It's been a while since your last conversation",
        (SuggestionType::Call, Urgency::Medium) => "A quick call keeps the connection warm",
        (SuggestionType::Call, Urgency::Low) => "Hearing their voice builds on your recent contact",
        (SuggestionType::Message, _) => "Referencing shared memories strengthens connections",
        (SuggestionType::Memory, _) => "Visual memories create emotional resonance",
    }
}

pub fn rank_suggestions(
    person_name: &str,
    last_memory: &str,
    memory_date_label: &str,
    urgency: Urgency,
) -> Vec<Suggestion> {
    SuggestionRanker::new().rank(person_name, last_memory, memory_date_label, urgency)
}

// =============================================================================
// TESTS
// =============================================================================
