use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Vital-sign substrings pulled from a clinical note.
///
/// Each field holds the first match verbatim (e.g. `"150/90"`, `"72"`,
/// `"1.8"`); the accessor methods parse them on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    pub bp: Option<String>,
    pub hr: Option<String>,
    pub creatinine: Option<String>,
}

impl VitalSigns {
    /// `(systolic, diastolic)` in mmHg.
    pub fn blood_pressure(&self) -> Option<(u32, u32)> {
        let (sys, dia) = self.bp.as_deref()?.split_once('/')?;
        Some((sys.trim().parse().ok()?, dia.trim().parse().ok()?))
    }

    /// Beats per minute.
    pub fn heart_rate(&self) -> Option<u32> {
        self.hr.as_deref()?.trim().parse().ok()
    }

    /// Serum creatinine in mg/dL.
    pub fn creatinine_value(&self) -> Option<f64> {
        self.creatinine.as_deref()?.trim().parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.bp.is_none() && self.hr.is_none() && self.creatinine.is_none()
    }
}
