//! Analyzer configuration
//!
//! Defaults equal the crate-root constants. Hosts that want different product
//! tuning can load overrides from JSON; missing keys keep their default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{
    COMMUNICATION_WINDOW_DAYS, FREQUENT_MAX_DAYS, IMPACT_CALL, IMPACT_MEMORY, IMPACT_MESSAGE,
    MEMORY_SATURATION, OCCASIONAL_MAX_DAYS, REGULAR_MAX_DAYS, TIER_EXCELLENT_MIN, TIER_FAIR_MIN,
    TIER_GOOD_MIN,
};

/// Cadence band upper bounds, in whole days, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceBands {
    pub frequent_max_days: i64,
    pub regular_max_days: i64,
    pub occasional_max_days: i64,
}

impl Default for CadenceBands {
    fn default() -> Self {
        Self {
            frequent_max_days: FREQUENT_MAX_DAYS,
            regular_max_days: REGULAR_MAX_DAYS,
            occasional_max_days: OCCASIONAL_MAX_DAYS,
        }
    }
}

/// Lower bounds of the health tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierCutoffs {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            excellent: TIER_EXCELLENT_MIN,
            good: TIER_GOOD_MIN,
            fair: TIER_FAIR_MIN,
        }
    }
}

/// Base estimated impact per suggestion type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionImpacts {
    pub call: f64,
    pub message: f64,
    pub memory: f64,
}

impl Default for SuggestionImpacts {
    fn default() -> Self {
        Self {
            call: IMPACT_CALL,
            message: IMPACT_MESSAGE,
            memory: IMPACT_MEMORY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub cadence: CadenceBands,
    pub communication_window_days: u32,
    pub memory_saturation: u32,
    pub tiers: TierCutoffs,
    pub impacts: SuggestionImpacts,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            cadence: CadenceBands::default(),
            communication_window_days: COMMUNICATION_WINDOW_DAYS,
            memory_saturation: MEMORY_SATURATION,
            tiers: TierCutoffs::default(),
            impacts: SuggestionImpacts::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a JSON override document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.cadence;
        if c.frequent_max_days < 0 {
            return Err(ConfigError::invalid("cadence.frequent_max_days", "must be >= 0"));
        }
        if c.regular_max_days <= c.frequent_max_days {
            return Err(ConfigError::invalid(
                "cadence.regular_max_days",
                "must be greater than frequent_max_days",
            ));
        }
        if c.occasional_max_days <= c.regular_max_days {
            return Err(ConfigError::invalid(
                "cadence.occasional_max_days",
                "must be greater than regular_max_days",
            ));
        }

        if self.communication_window_days == 0 {
            return Err(ConfigError::invalid("communication_window_days", "must be > 0"));
        }
        if self.memory_saturation == 0 {
            return Err(ConfigError::invalid("memory_saturation", "must be > 0"));
        }

        let t = &self.tiers;
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !(in_unit(t.excellent) && in_unit(t.good) && in_unit(t.fair)) {
            return Err(ConfigError::invalid("tiers", "cutoffs must lie in [0, 1]"));
        }
        if !(t.excellent > t.good && t.good > t.fair) {
            return Err(ConfigError::invalid("tiers", "cutoffs must be strictly descending"));
        }

        for (key, value) in [
            ("impacts.call", self.impacts.call),
            ("impacts.message", self.impacts.message),
            ("impacts.memory", self.impacts.memory),
        ] {
            if !in_unit(value) {
                return Err(ConfigError::invalid(key, "must lie in [0, 1]"));
            }
        }

        Ok(())
    }
}
