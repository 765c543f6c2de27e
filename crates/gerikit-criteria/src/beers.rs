use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gerikit_core::models::medication::normalize_name;

use crate::tables::ReferenceTables;

/// A potentially inappropriate medication for older adults.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeersEntry {
    /// Canonical generic name.
    pub drug: String,
    pub category: String,
    pub reason: String,
    pub recommendation: String,
}

/// A caller-supplied medication that matched the Beers list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeersFinding {
    pub medication: String,
    pub entry: BeersEntry,
}

#[derive(Debug, Clone, Default)]
pub struct BeersList {
    entries: Vec<BeersEntry>,
    by_drug: HashMap<String, usize>,
}

impl BeersList {
    pub fn new(mut entries: Vec<BeersEntry>) -> Self {
        let mut by_drug = HashMap::new();
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.drug = normalize_name(&entry.drug);
            by_drug.entry(entry.drug.clone()).or_insert(i);
        }
        Self { entries, by_drug }
    }

    pub fn entries(&self) -> &[BeersEntry] {
        &self.entries
    }

    /// Look up a canonical name.
    pub fn get(&self, canonical: &str) -> Option<&BeersEntry> {
        self.by_drug.get(canonical).map(|&i| &self.entries[i])
    }
}

/// The medications in `medications` that appear on the Beers list, in input
/// order and exactly as the caller spelled them.
pub fn check_beers_list<S: AsRef<str>>(tables: &ReferenceTables, medications: &[S]) -> Vec<String> {
    beers_findings(tables, medications)
        .into_iter()
        .map(|f| f.medication)
        .collect()
}

/// Like [`check_beers_list`], with the matched entry for each medication.
pub fn beers_findings<S: AsRef<str>>(
    tables: &ReferenceTables,
    medications: &[S],
) -> Vec<BeersFinding> {
    medications
        .iter()
        .filter_map(|m| {
            let canonical = tables.formulary.canonical_or_normalized(m.as_ref());
            tables.beers.get(&canonical).map(|entry| BeersFinding {
                medication: m.as_ref().to_string(),
                entry: entry.clone(),
            })
        })
        .collect()
}
