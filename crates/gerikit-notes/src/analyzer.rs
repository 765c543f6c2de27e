use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gerikit_core::models::advisory::Advisory;
use gerikit_core::models::medication::MedicationMention;
use gerikit_core::models::vitals::VitalSigns;
use gerikit_criteria::ReferenceTables;

use crate::recognize::{distinct_medications, recognize_medications};
use crate::rules::{RuleContext, evaluate, evaluate_vitals};
use crate::vitals::extract_vitals;

/// Everything derived from one note. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NoteAnalysis {
    /// Distinct canonical medication names, first-seen order.
    pub medications: Vec<String>,
    pub mentions: Vec<MedicationMention>,
    /// Medication advisories.
    pub advisories: Vec<Advisory>,
    pub vitals: VitalSigns,
    /// Out-of-range vital signs, independent of medications.
    pub vital_alerts: Vec<Advisory>,
}

impl NoteAnalysis {
    pub fn has_critical(&self) -> bool {
        self.critical_advisories().next().is_some()
    }

    /// Critical medication advisories followed by critical vital alerts.
    pub fn critical_advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.advisories
            .iter()
            .chain(&self.vital_alerts)
            .filter(|a| a.critical)
    }
}

/// Runs notes against one set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct NoteAnalyzer<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> NoteAnalyzer<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn analyze(&self, text: &str) -> NoteAnalysis {
        let mentions = recognize_medications(&self.tables.formulary, text);
        let medications = distinct_medications(&mentions);
        let vitals = extract_vitals(text);

        let ctx = RuleContext {
            tables: self.tables,
            medications: &medications,
            vitals: &vitals,
        };
        let advisories = evaluate(&ctx);
        let vital_alerts = evaluate_vitals(&ctx);

        tracing::debug!(
            text_len = text.len(),
            medications = medications.len(),
            advisories = advisories.len(),
            vital_alerts = vital_alerts.len(),
            "note analyzed"
        );

        NoteAnalysis {
            medications,
            mentions,
            advisories,
            vitals,
            vital_alerts,
        }
    }
}
