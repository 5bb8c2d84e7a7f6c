//! Setup errors.
//!
//! Gameplay itself never fails (invalid moves are rejected no-ops); only
//! building an engine from a config and touching the preference store can.

use thiserror::Error;

/// Why a `GameConfig` was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{table}`: probabilities sum to {sum}, expected 1")]
    OddsDoNotSumToOne { table: &'static str, sum: f64 },

    #[error("`{table}`: probability {value} is not a finite value in [0, 1]")]
    InvalidProbability { table: &'static str, value: f64 },

    #[error("`{table}`: range [{min}, {max}] is inverted")]
    InvertedRange { table: &'static str, min: u32, max: u32 },

    #[error("`weapons.{tier}`: power range must start above the previous tier")]
    TierOrder { tier: &'static str },

    #[error("`weapons.{tier}`: needs {needed} names, has {found}")]
    MissingWeaponNames {
        tier: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("`monsters`: roster is empty")]
    EmptyRoster,

    #[error("`{field}`: must be {requirement}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Why the preference store could not be read or written.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
