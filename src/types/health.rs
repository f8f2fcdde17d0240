//! Relationship metrics and health score types

use serde::{Deserialize, Serialize};

use crate::config::TierCutoffs;

/// Inputs to the health scorer, derived fresh from records on every call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationshipMetrics {
    /// Whole days since the most recent record
    pub last_interaction_days: u32,
    /// Caller-supplied emotional strength, 0.0-1.0
    pub connection_strength: f64,
    /// Number of records
    pub total_memories: u32,
}

/// Qualitative band of the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl HealthTier {
    /// Tier for `overall` under the default cutoffs
    pub fn from_overall(overall: f64) -> Self {
        Self::classify(overall, &TierCutoffs::default())
    }

    /// Half-open bands `[fair, good)`, `[good, excellent)`; the top band is
    /// closed at 1.0. NaN lands in `NeedsAttention`.
    pub fn classify(overall: f64, cutoffs: &TierCutoffs) -> Self {
        if overall >= cutoffs.excellent {
            Self::Excellent
        } else if overall >= cutoffs.good {
            Self::Good
        } else if overall >= cutoffs.fair {
            Self::Fair
        } else {
            Self::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "blue",
            Self::Fair => "yellow",
            Self::NeedsAttention => "red",
        }
    }

    pub fn recommendations(&self) -> [&'static str; 2] {
        match self {
            Self::Excellent => ["Maintain regular contact", "Continue sharing experiences"],
            Self::Good => ["Increase communication frequency", "Plan quality time together"],
            Self::Fair => ["Reach out soon", "Address any relationship concerns"],
            Self::NeedsAttention => [
                "Prioritize reconnection",
                "Consider having an honest conversation",
            ],
        }
    }
}

impl std::fmt::Display for HealthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Composite relationship health
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Mean of the three components
    pub overall: f64,
    /// Recency, decays to 0 over the communication window
    pub communication: f64,
    /// Connection strength
    pub emotional: f64,
    /// Volume, saturates at the memory cap
    pub memory: f64,
    pub tier: HealthTier,
    pub recommendations: Vec<String>,
}
