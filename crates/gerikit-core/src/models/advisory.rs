use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which decision-table rule produced an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdvisoryCode {
    BleedingRisk,
    DuplicateAnticoagulant,
    Polypharmacy,
    Interaction,
    Beers,
    AnticholinergicBurden,
    CnsPolypharmacy,
    HypertensiveUrgency,
    Hypotension,
    Bradycardia,
    Tachycardia,
    RenalDosing,
}

/// An advisory emitted by the note analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Advisory {
    pub code: AdvisoryCode,
    pub message: String,
    pub critical: bool,
}

impl Advisory {
    pub fn critical(code: AdvisoryCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            critical: true,
        }
    }

    pub fn warning(code: AdvisoryCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            critical: false,
        }
    }
}
