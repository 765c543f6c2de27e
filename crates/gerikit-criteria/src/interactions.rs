use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gerikit_core::models::interaction::{Interaction, Severity};
use gerikit_core::models::medication::normalize_name;

use crate::tables::ReferenceTables;

/// A known dangerous combination of two medications. Order of `drug_a` and
/// `drug_b` carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InteractionRule {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    pub effect: String,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    rules: Vec<InteractionRule>,
    by_pair: HashMap<(String, String), usize>,
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl InteractionTable {
    pub fn new(mut rules: Vec<InteractionRule>) -> Self {
        let mut by_pair = HashMap::new();
        for (i, rule) in rules.iter_mut().enumerate() {
            rule.drug_a = normalize_name(&rule.drug_a);
            rule.drug_b = normalize_name(&rule.drug_b);
            by_pair
                .entry(pair_key(&rule.drug_a, &rule.drug_b))
                .or_insert(i);
        }
        Self { rules, by_pair }
    }

    pub fn rules(&self) -> &[InteractionRule] {
        &self.rules
    }

    /// Look up an unordered pair of canonical names.
    pub fn get(&self, a: &str, b: &str) -> Option<&InteractionRule> {
        self.by_pair.get(&pair_key(a, b)).map(|&i| &self.rules[i])
    }
}

/// Test every unordered pair of distinct medications against the table.
///
/// Names are canonicalized first, so a brand and its generic count as the
/// same medication. `drug_a` of each result is the one listed earlier.
pub fn check_interactions<S: AsRef<str>>(
    tables: &ReferenceTables,
    medications: &[S],
) -> Vec<Interaction> {
    let canonical = tables.distinct_canonical(medications);

    let mut found = Vec::new();
    for (i, a) in canonical.iter().enumerate() {
        for b in &canonical[i + 1..] {
            if let Some(rule) = tables.interactions.get(a, b) {
                found.push(Interaction {
                    drug_a: a.clone(),
                    drug_b: b.clone(),
                    severity: rule.severity,
                    effect: rule.effect.clone(),
                });
            }
        }
    }

    tracing::debug!(
        medications = canonical.len(),
        interactions = found.len(),
        "interaction check complete"
    );
    found
}
