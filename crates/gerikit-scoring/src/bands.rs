//! Threshold categorizers. Bands are checked from the highest threshold
//! downward and the first match wins, so every finite score maps to exactly
//! one band. NaN compares false against every threshold and lands in the
//! lowest band.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const MORSE_HIGH_RISK: f64 = 45.0;
pub const MORSE_MODERATE_RISK: f64 = 25.0;

pub const MMSE_NORMAL: f64 = 24.0;
pub const MMSE_MILD: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MorseRisk {
    Low,
    Moderate,
    High,
}

impl MorseRisk {
    pub fn label(&self) -> &'static str {
        match self {
            MorseRisk::Low => "Low risk",
            MorseRisk::Moderate => "Moderate risk",
            MorseRisk::High => "High risk",
        }
    }
}

impl fmt::Display for MorseRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Morse Fall Scale: >=45 high, >=25 moderate, otherwise low.
pub fn morse_fall_risk(score: f64) -> MorseRisk {
    if score >= MORSE_HIGH_RISK {
        MorseRisk::High
    } else if score >= MORSE_MODERATE_RISK {
        MorseRisk::Moderate
    } else {
        MorseRisk::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MmseBand {
    Normal,
    MildImpairment,
    SevereImpairment,
}

impl MmseBand {
    pub fn label(&self) -> &'static str {
        match self {
            MmseBand::Normal => "Normal",
            MmseBand::MildImpairment => "Mild impairment",
            MmseBand::SevereImpairment => "Severe impairment",
        }
    }
}

impl fmt::Display for MmseBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// MMSE: 24–30 normal, 18–23 mild impairment, 0–17 severe impairment.
pub fn interpret_mmse(score: f64) -> MmseBand {
    if score >= MMSE_NORMAL {
        MmseBand::Normal
    } else if score >= MMSE_MILD {
        MmseBand::MildImpairment
    } else {
        MmseBand::SevereImpairment
    }
}
