//! Per-person pattern report - the only artifact the presentation layer reads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::types::{
    EmotionalTrend, HealthScore, InteractionFrequency, RelationshipMetrics, Suggestion,
};

/// Sentinel used on the wire when there has never been an interaction
pub const NEVER: &str = "never";

/// Timestamp of the most recent record, or `Never`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastInteraction {
    At(DateTime<Utc>),
    Never,
}

impl LastInteraction {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(t) => Some(*t),
            Self::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

impl From<Option<DateTime<Utc>>> for LastInteraction {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Never, Self::At)
    }
}

impl std::fmt::Display for LastInteraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At(t) => write!(f, "{}", t.to_rfc3339()),
            Self::Never => write!(f, "{}", NEVER),
        }
    }
}

impl Serialize for LastInteraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::At(t) => t.serialize(serializer),
            Self::Never => serializer.serialize_str(NEVER),
        }
    }
}

impl<'de> Deserialize<'de> for LastInteraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == NEVER {
            return Ok(Self::Never);
        }
        DateTime::parse_from_rfc3339(&s)
            .map(|t| Self::At(t.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

/// Summary of one person's interaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    pub person_name: String,
    pub total_entries: usize,
    /// Most frequent mood label, or "Neutral" with no records
    pub dominant_emotion: String,
    pub interaction_frequency: InteractionFrequency,
    pub emotional_trend: EmotionalTrend,
    pub last_interaction: LastInteraction,
    pub metrics: RelationshipMetrics,
    pub health_score: HealthScore,
    /// Always three, sorted by impact
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reconnection_hint: Option<String>,
}

impl PatternReport {
    /// SHA-256 of the canonical JSON, hex encoded.
    /// Identical inputs produce identical fingerprints.
    pub fn fingerprint(&self) -> String {
        // Every field is plain data; serialization can't fail here.
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
