use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::InstrumentError;

/// The type of score an item or composite produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled count or sum.
    Raw,
    /// Present/absent risk factor (0 or 1).
    Indicator,
    /// Risk factor carrying a fixed point weight (e.g. 0/2, 0/15/30).
    Weighted,
    /// Per-item correct-answer count (cognitive screening sections).
    Correct,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn stepped(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step: Some(step),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A single scored item within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A top-level domain within an instrument, containing items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A score entry provided by the caller for one item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}

/// An ordered set of risk-factor values, built per call and discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskFactorSet(Vec<f64>);

impl RiskFactorSet {
    pub fn new(factors: Vec<f64>) -> Self {
        Self(factors)
    }

    /// Build from untyped JSON, rejecting anything that is not a number.
    pub fn from_json_values(values: &[serde_json::Value]) -> Result<Self, InstrumentError> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .as_f64()
                    .ok_or_else(|| InstrumentError::NonNumericFactor {
                        index,
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn total(&self) -> f64 {
        sum_score(&self.0)
    }
}

impl From<Vec<f64>> for RiskFactorSet {
    fn from(factors: Vec<f64>) -> Self {
        Self(factors)
    }
}

/// Sum a sequence of risk-factor values.
///
/// Values are summed unchanged: negative and out-of-range entries are not
/// clamped. Use [`crate::Instrument::validate_scores`] to report them.
pub fn sum_score(factors: &[f64]) -> f64 {
    factors.iter().fold(0.0, |acc, x| acc + x)
}
