//! Data-driven simulation constants
//!
//! Defaults mirror `crate::consts`. A JSON document may override any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the weight of the next dropped object is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Roll a fresh weight on every click
    PerClick,
    /// Show a pre-rolled weight, use it on the next click, then roll again
    #[default]
    Preview,
}

impl WeightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightMode::PerClick => "per-click",
            WeightMode::Preview => "preview",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("weight range must satisfy 1 <= min <= max, got {min}..={max}")]
    WeightRange { min: u32, max: u32 },
    #[error("max_weight_kg must be at most {limit}, got {max}")]
    WeightLimit { max: u32, limit: u32 },
}

/// Seesaw tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Nominal plank length (pixels)
    pub plank_length_px: f32,
    /// Tilt limit (degrees, symmetric)
    pub max_angle_deg: f32,
    /// Torque units per degree of tilt
    pub torque_scale: f32,
    pub min_weight_kg: u32,
    pub max_weight_kg: u32,
    pub weight_mode: WeightMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            plank_length_px: PLANK_LENGTH_PX,
            max_angle_deg: MAX_ANGLE_DEG,
            torque_scale: TORQUE_SCALE,
            min_weight_kg: MIN_WEIGHT_KG,
            max_weight_kg: MAX_WEIGHT_KG,
            weight_mode: WeightMode::Preview,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a tuning file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("plank_length_px", self.plank_length_px),
            ("max_angle_deg", self.max_angle_deg),
            ("torque_scale", self.torque_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        if self.min_weight_kg == 0 || self.min_weight_kg > self.max_weight_kg {
            return Err(TuningError::WeightRange {
                min: self.min_weight_kg,
                max: self.max_weight_kg,
            });
        }
        if self.max_weight_kg > WEIGHT_LIMIT_KG {
            return Err(TuningError::WeightLimit {
                max: self.max_weight_kg,
                limit: WEIGHT_LIMIT_KG,
            });
        }
        Ok(())
    }

    /// Half the nominal plank length; objects never sit further than this from center
    #[inline]
    pub fn half_plank_length(&self) -> f32 {
        self.plank_length_px / 2.0
    }
}
