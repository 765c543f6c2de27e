use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Clinical severity of a drug-drug interaction.
///
/// Ordered from least to most severe so callers can compare with `>=`.
/// Serializes as snake_case; deserializing accepts any label
/// [`Severity::parse`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// Monitor for effects.
    Minor,
    /// Use with caution, may need dose adjustment.
    Moderate,
    /// Avoid the combination where possible.
    Major,
    /// Never combine.
    Contraindicated,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Major => "Major",
            Severity::Contraindicated => "Contraindicated",
        }
    }

    /// Whether an advisory raised for this severity is flagged critical.
    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Major | Severity::Contraindicated)
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "minor" => Ok(Severity::Minor),
            "moderate" => Ok(Severity::Moderate),
            "major" | "severe" => Ok(Severity::Major),
            "contraindicated" => Ok(Severity::Contraindicated),
            other => Err(CoreError::UnknownSeverity(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Severity::parse(&label).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched interaction between two medications in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interaction {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    pub effect: String,
}
