//! Cadence, trend and urgency categories

use serde::{Deserialize, Serialize};

/// How recently the last interaction happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionFrequency {
    Frequent,
    Regular,
    Occasional,
    Rare,
}

impl InteractionFrequency {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Frequent => "Multiple times per week",
            Self::Regular => "Weekly interactions",
            Self::Occasional => "Monthly interactions",
            Self::Rare => "Infrequent contact",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Frequent => "green",
            Self::Regular => "blue",
            Self::Occasional => "yellow",
            Self::Rare => "red",
        }
    }

    /// Urgency of reconnecting at this cadence
    pub fn urgency(&self) -> Urgency {
        match self {
            Self::Rare => Urgency::High,
            Self::Occasional => Urgency::Medium,
            Self::Regular | Self::Frequent => Urgency::Low,
        }
    }
}

impl std::fmt::Display for InteractionFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Frequent => "Frequent",
            Self::Regular => "Regular",
            Self::Occasional => "Occasional",
            Self::Rare => "Rare",
        };
        write!(f, "{}", name)
    }
}

/// Direction of change in positive sentiment, older → recent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTrend {
    Improving,
    Stable,
    Declining,
}

impl EmotionalTrend {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Improving => "arrow.up.circle.fill",
            Self::Stable => "minus.circle.fill",
            Self::Declining => "arrow.down.circle.fill",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Improving => "green",
            Self::Stable => "blue",
            Self::Declining => "orange",
        }
    }
}

impl std::fmt::Display for EmotionalTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Improving => "Improving",
            Self::Stable => "Stable",
            Self::Declining => "Declining",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl From<InteractionFrequency> for Urgency {
    fn from(frequency: InteractionFrequency) -> Self {
        frequency.urgency()
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{}", name)
    }
}
