//! The advisory decision tables. Every rule sees the same context and is
//! evaluated independently; all matching rules fire.
//!
//! Medication rules only ever fire for recognized medications. Vital-sign
//! alerts are a separate table so a note naming no medication yields no
//! advisories.

use gerikit_core::models::advisory::{Advisory, AdvisoryCode};
use gerikit_core::models::vitals::VitalSigns;
use gerikit_criteria::ReferenceTables;
use gerikit_criteria::acb::anticholinergic_burden;
use gerikit_criteria::beers::beers_findings;
use gerikit_criteria::formulary::DrugClass;
use gerikit_criteria::interactions::check_interactions;
use gerikit_scoring::instruments::acb::ACB_HIGH_BURDEN;

/// More distinct medications than this is polypharmacy.
pub const POLYPHARMACY_THRESHOLD: usize = 5;
/// This many CNS-active medications together raise falls risk.
pub const CNS_ACTIVE_LIMIT: usize = 3;

pub const HYPERTENSIVE_SYSTOLIC: u32 = 180;
pub const HYPERTENSIVE_DIASTOLIC: u32 = 110;
pub const HYPOTENSIVE_SYSTOLIC: u32 = 90;
pub const BRADYCARDIA_BPM: u32 = 50;
pub const TACHYCARDIA_BPM: u32 = 120;
/// mg/dL
pub const RENAL_CREATININE: f64 = 1.5;

/// Inputs shared by every rule.
pub struct RuleContext<'a> {
    pub tables: &'a ReferenceTables,
    /// Distinct canonical names, first-seen order.
    pub medications: &'a [String],
    pub vitals: &'a VitalSigns,
}

impl RuleContext<'_> {
    fn with_class(&self, class: DrugClass) -> Vec<&str> {
        self.medications
            .iter()
            .filter(|m| self.tables.formulary.has_class(m, class))
            .map(String::as_str)
            .collect()
    }
}

type Rule = fn(&RuleContext<'_>) -> Vec<Advisory>;

const MEDICATION_RULES: &[Rule] = &[
    bleeding_risk,
    duplicate_anticoagulant,
    polypharmacy,
    interactions,
    beers,
    anticholinergic,
    cns_polypharmacy,
    renal_dosing,
];

const VITAL_RULES: &[Rule] = &[blood_pressure, heart_rate];

fn run(rules: &[Rule], ctx: &RuleContext<'_>) -> Vec<Advisory> {
    rules.iter().flat_map(|rule| rule(ctx)).collect()
}

/// Medication advisories in table order. Empty when no medication was
/// recognized.
pub fn evaluate(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    if ctx.medications.is_empty() {
        return vec![];
    }
    run(MEDICATION_RULES, ctx)
}

/// Alerts raised by the vital signs alone.
pub fn evaluate_vitals(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    run(VITAL_RULES, ctx)
}

fn bleeding_risk(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let anticoagulants = ctx.with_class(DrugClass::Anticoagulant);
    let antiplatelets = ctx.with_class(DrugClass::Antiplatelet);
    if anticoagulants.is_empty() || antiplatelets.is_empty() {
        return vec![];
    }
    vec![Advisory::critical(
        AdvisoryCode::BleedingRisk,
        format!(
            "Bleeding risk: anticoagulant ({}) combined with antiplatelet ({})",
            anticoagulants.join(", "),
            antiplatelets.join(", ")
        ),
    )]
}

fn duplicate_anticoagulant(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let anticoagulants = ctx.with_class(DrugClass::Anticoagulant);
    if anticoagulants.len() < 2 {
        return vec![];
    }
    vec![Advisory::critical(
        AdvisoryCode::DuplicateAnticoagulant,
        format!(
            "More than one anticoagulant: {}",
            anticoagulants.join(", ")
        ),
    )]
}

fn polypharmacy(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let count = ctx.medications.len();
    if count <= POLYPHARMACY_THRESHOLD {
        return vec![];
    }
    vec![Advisory::warning(
        AdvisoryCode::Polypharmacy,
        format!("Polypharmacy: {count} medications; review for deprescribing"),
    )]
}

fn interactions(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    check_interactions(ctx.tables, ctx.medications)
        .into_iter()
        .map(|i| Advisory {
            code: AdvisoryCode::Interaction,
            message: format!(
                "{} interaction: {} + {}: {}",
                i.severity, i.drug_a, i.drug_b, i.effect
            ),
            critical: i.severity.is_critical(),
        })
        .collect()
}

fn beers(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    beers_findings(ctx.tables, ctx.medications)
        .into_iter()
        .map(|f| {
            Advisory::warning(
                AdvisoryCode::Beers,
                format!(
                    "Beers criteria: {} ({}): {}. {}",
                    f.medication, f.entry.category, f.entry.reason, f.entry.recommendation
                ),
            )
        })
        .collect()
}

fn anticholinergic(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let result = anticholinergic_burden(ctx.tables, ctx.medications);
    if result.total < ACB_HIGH_BURDEN {
        return vec![];
    }
    vec![Advisory::warning(
        AdvisoryCode::AnticholinergicBurden,
        format!(
            "Anticholinergic burden score {}: increased risk of confusion and falls",
            result.total
        ),
    )]
}

fn cns_polypharmacy(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let cns: Vec<&str> = ctx
        .medications
        .iter()
        .filter(|m| {
            ctx.tables
                .formulary
                .lookup(m)
                .is_some_and(|e| e.classes.iter().any(DrugClass::is_cns_active))
        })
        .map(String::as_str)
        .collect();
    if cns.len() < CNS_ACTIVE_LIMIT {
        return vec![];
    }
    vec![Advisory::warning(
        AdvisoryCode::CnsPolypharmacy,
        format!(
            "{} CNS-active medications ({}): increased falls risk",
            cns.len(),
            cns.join(", ")
        ),
    )]
}

fn blood_pressure(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let Some((systolic, diastolic)) = ctx.vitals.blood_pressure() else {
        return vec![];
    };

    let mut advisories = Vec::new();
    if systolic >= HYPERTENSIVE_SYSTOLIC || diastolic >= HYPERTENSIVE_DIASTOLIC {
        advisories.push(Advisory::critical(
            AdvisoryCode::HypertensiveUrgency,
            format!("Blood pressure {systolic}/{diastolic}: hypertensive urgency range"),
        ));
    }
    if systolic < HYPOTENSIVE_SYSTOLIC {
        advisories.push(Advisory::critical(
            AdvisoryCode::Hypotension,
            format!("Blood pressure {systolic}/{diastolic}: hypotension"),
        ));
    }
    advisories
}

fn heart_rate(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    match ctx.vitals.heart_rate() {
        Some(bpm) if bpm < BRADYCARDIA_BPM => vec![Advisory::critical(
            AdvisoryCode::Bradycardia,
            format!("Heart rate {bpm}: bradycardia; review rate-limiting medications"),
        )],
        Some(bpm) if bpm > TACHYCARDIA_BPM => vec![Advisory::critical(
            AdvisoryCode::Tachycardia,
            format!("Heart rate {bpm}: tachycardia"),
        )],
        _ => vec![],
    }
}

fn renal_dosing(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let Some(creatinine) = ctx.vitals.creatinine_value() else {
        return vec![];
    };
    if creatinine < RENAL_CREATININE {
        return vec![];
    }
    let renal: Vec<&str> = ctx
        .medications
        .iter()
        .filter(|m| {
            ctx.tables
                .formulary
                .lookup(m)
                .is_some_and(|e| e.renal_caution)
        })
        .map(String::as_str)
        .collect();
    if renal.is_empty() {
        return vec![];
    }
    vec![Advisory::warning(
        AdvisoryCode::RenalDosing,
        format!(
            "Creatinine {creatinine}: review dosing of renally cleared medications ({})",
            renal.join(", ")
        ),
    )]
}
