//! Deployment configuration with documented constants
//!
//! The tunables that gate and price a posture change are collected here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{LoadError, Result};

/// Supply (in days) at or below which a unit may no longer change posture
pub const CRITICAL_SUPPLY_THRESHOLD: f32 = 1.0;

/// Fraction of maximum movement points a posture change costs
pub const DEPLOYMENT_ACTION_MOVEMENT_FRACTION: f32 = 0.25;

/// Supply (in days) spent by every successful posture change
pub const TRANSITION_SUPPLY_COST: f32 = 0.25;

/// Movement points added to both current and max on entering Mobile
pub const MOBILE_MOVEMENT_BONUS: f32 = 2.0;

/// Configuration for the deployment state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostureConfig {
    /// Supply threshold in days
    ///
    /// A unit whose current supply is at or below this value is refused any
    /// posture change. Must be at least `transition_supply_cost` so that a
    /// permitted change can never drive supply negative.
    pub critical_supply_threshold: f32,

    /// Share of max movement points a posture change needs and consumes
    ///
    /// At 0.25 a unit can change posture at most four times on a full tank,
    /// ignoring any rescale of its allowance between changes.
    pub deployment_movement_fraction: f32,

    /// Days of supply charged per successful change
    pub transition_supply_cost: f32,

    /// Flat movement bonus for entering Mobile
    pub mobile_movement_bonus: f32,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            critical_supply_threshold: CRITICAL_SUPPLY_THRESHOLD,
            deployment_movement_fraction: DEPLOYMENT_ACTION_MOVEMENT_FRACTION,
            transition_supply_cost: TRANSITION_SUPPLY_COST,
            mobile_movement_bonus: MOBILE_MOVEMENT_BONUS,
        }
    }
}

impl PostureConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PostureConfig = toml::from_str(content)?;
        config.validate().map_err(LoadError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let fields = [
            ("critical_supply_threshold", self.critical_supply_threshold),
            ("deployment_movement_fraction", self.deployment_movement_fraction),
            ("transition_supply_cost", self.transition_supply_cost),
            ("mobile_movement_bonus", self.mobile_movement_bonus),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("{} ({}) must be a finite number", name, value));
        }

        if !(self.deployment_movement_fraction > 0.0 && self.deployment_movement_fraction <= 1.0) {
            return Err(format!(
                "deployment_movement_fraction ({}) must be in (0, 1]",
                self.deployment_movement_fraction
            ));
        }

        if self.transition_supply_cost < 0.0 || self.mobile_movement_bonus < 0.0 {
            return Err("Costs and bonuses must be non-negative".into());
        }

        if self.transition_supply_cost > self.critical_supply_threshold {
            return Err(format!(
                "transition_supply_cost ({}) should be <= critical_supply_threshold ({})",
                self.transition_supply_cost, self.critical_supply_threshold
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<PostureConfig> = OnceLock::new();

/// Get the global posture config (initializes with defaults if not set)
pub fn config() -> &'static PostureConfig {
    CONFIG.get_or_init(PostureConfig::default)
}

/// Set the global posture config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: PostureConfig) -> std::result::Result<(), PostureConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PostureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PostureConfig::from_toml_str("mobile_movement_bonus = 3.0").unwrap();
        assert_eq!(config.mobile_movement_bonus, 3.0);
        assert_eq!(config.critical_supply_threshold, CRITICAL_SUPPLY_THRESHOLD);
    }

    #[test]
    fn test_rejects_cost_above_threshold() {
        let result = PostureConfig::from_toml_str(
            "critical_supply_threshold = 0.5\ntransition_supply_cost = 1.0",
        );
        assert!(matches!(result, Err(LoadError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_fraction() {
        let config = PostureConfig {
            deployment_movement_fraction: 0.0,
            ..PostureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(matches!(
            PostureConfig::from_toml_str("transition_supply_cost = nan"),
            Err(LoadError::InvalidConfig(_))
        ));
        assert!(matches!(
            PostureConfig::from_toml_str("mobile_movement_bonus = inf"),
            Err(LoadError::InvalidConfig(_))
        ));

        let config = PostureConfig {
            critical_supply_threshold: f32::NAN,
            ..PostureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_default_data_file() {
        let config = PostureConfig::load(Path::new("data/posture.toml"))
            .expect("Should load default posture config");
        assert!(config.validate().is_ok());
    }
}
