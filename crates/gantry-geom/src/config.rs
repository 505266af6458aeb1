// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision configuration.
//!
//! Passed explicitly to [`crate::CollisionManager::new`]; nothing is read
//! from ambient state. Every field has a default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::obb::AxisMode;

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A field holds a value outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which broad-phase candidates reach the narrow phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowPhaseFilter {
    /// Only neighbours whose motion has a positive dot product with the
    /// mover's motion. Stationary neighbours are never tested.
    #[default]
    PositiveConvergence,
    /// Neighbours the mover is closing on: the requested delta relative to
    /// the neighbour's motion points from the mover's centre toward the
    /// neighbour's centre.
    Closing,
    /// Every broad-phase candidate.
    All,
}

/// Tunables for [`crate::CollisionManager`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollisionConfig {
    /// World units added on every side of the mover's bounds when gathering
    /// candidates. Must be finite and non-negative.
    pub broad_phase_margin: f64,
    /// Probe axes used for both boxes in every SAT test.
    pub axis_mode: AxisMode,
    /// Candidate filter applied before the SAT test.
    pub narrow_phase_filter: NarrowPhaseFilter,
    /// Whether a touching contact stalls the mover.
    pub stall_on_touch: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            broad_phase_margin: 1.0,
            axis_mode: AxisMode::default(),
            narrow_phase_filter: NarrowPhaseFilter::default(),
            stall_on_touch: true,
        }
    }
}

impl CollisionConfig {
    /// Parses a JSON document and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.broad_phase_margin.is_finite() || self.broad_phase_margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "broad_phase_margin must be finite and >= 0, got {}",
                self.broad_phase_margin
            )));
        }
        Ok(())
    }
}
