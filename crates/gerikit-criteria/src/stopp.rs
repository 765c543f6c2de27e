//! STOPP (screening tool of older persons' prescriptions) and START
//! (screening tool to alert to right treatment) rules.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gerikit_core::models::medication::normalize_name;

use crate::formulary::DrugClass;
use crate::tables::ReferenceTables;

/// What a STOPP rule matches: one medication or a whole class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum DrugTarget {
    Drug(String),
    Class(DrugClass),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoppRule {
    pub id: String,
    pub target: DrugTarget,
    /// Only fires when this condition is present. `None` fires on the
    /// medication alone.
    #[serde(default)]
    pub condition: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StartRule {
    pub id: String,
    pub condition: String,
    /// Satisfied by a medication in any of these classes.
    pub recommended: Vec<DrugClass>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoppFinding {
    pub rule_id: String,
    pub medication: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StartFinding {
    pub rule_id: String,
    pub condition: String,
    pub recommended: Vec<DrugClass>,
    pub reason: String,
}

/// Normalize a condition label: lower case, spaces and hyphens become
/// underscores ("Heart failure" -> "heart_failure").
pub fn normalize_condition(condition: &str) -> String {
    normalize_name(condition)
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn matches_target(tables: &ReferenceTables, canonical: &str, target: &DrugTarget) -> bool {
    match target {
        DrugTarget::Drug(name) => normalize_name(name) == canonical,
        DrugTarget::Class(class) => tables.formulary.has_class(canonical, *class),
    }
}

/// STOPP rules triggered by a medication list, one finding per medication
/// and rule, in rule order.
pub fn check_stopp<M: AsRef<str>, C: AsRef<str>>(
    tables: &ReferenceTables,
    medications: &[M],
    conditions: &[C],
) -> Vec<StoppFinding> {
    let canonical = tables.distinct_canonical(medications);
    let conditions: Vec<String> = conditions
        .iter()
        .map(|c| normalize_condition(c.as_ref()))
        .collect();

    let mut findings = Vec::new();
    for rule in &tables.stopp {
        let gated_in = rule
            .condition
            .as_deref()
            .is_none_or(|c| conditions.contains(&normalize_condition(c)));
        if !gated_in {
            continue;
        }
        for med in canonical.iter().filter(|m| matches_target(tables, m, &rule.target)) {
            findings.push(StoppFinding {
                rule_id: rule.id.clone(),
                medication: med.clone(),
                reason: rule.reason.clone(),
            });
        }
    }
    findings
}

/// START rules whose condition is present but whose recommended therapy is
/// missing from the medication list.
pub fn check_start<M: AsRef<str>, C: AsRef<str>>(
    tables: &ReferenceTables,
    medications: &[M],
    conditions: &[C],
) -> Vec<StartFinding> {
    let canonical = tables.distinct_canonical(medications);
    let conditions: Vec<String> = conditions
        .iter()
        .map(|c| normalize_condition(c.as_ref()))
        .collect();

    tables
        .start
        .iter()
        .filter(|rule| conditions.contains(&normalize_condition(&rule.condition)))
        .filter(|rule| {
            !canonical.iter().any(|m| {
                rule.recommended
                    .iter()
                    .any(|class| tables.formulary.has_class(m, *class))
            })
        })
        .map(|rule| StartFinding {
            rule_id: rule.id.clone(),
            condition: normalize_condition(&rule.condition),
            recommended: rule.recommended.clone(),
            reason: rule.reason.clone(),
        })
        .collect()
}
