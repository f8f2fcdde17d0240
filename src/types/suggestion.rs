//! Reconnection suggestion types

use serde::{Deserialize, Serialize};

use crate::types::Urgency;

/// Kind of reconnection action. Declaration order breaks impact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Call,
    Message,
    Memory,
}

impl SuggestionType {
    pub const ALL: [SuggestionType; 3] = [
        SuggestionType::Call,
        SuggestionType::Message,
        SuggestionType::Memory,
    ];
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Call => "call",
            Self::Message => "message",
            Self::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// A candidate reconnection action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub content: String,
    pub reasoning: String,
    pub urgency: Urgency,
    /// 0.0-1.0
    pub estimated_impact: f64,
}
