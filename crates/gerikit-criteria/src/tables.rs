use std::path::Path;
use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::beers::{BeersEntry, BeersList};
use crate::bundled;
use crate::error::CriteriaError;
use crate::formulary::{DrugEntry, Formulary};
use crate::interactions::{InteractionRule, InteractionTable};
use crate::stopp::{StartRule, StoppRule};

/// All static reference data used by the checkers and the note analyzer.
///
/// Built once and never mutated afterwards. Pass it by reference to the
/// checkers; [`ReferenceTables::bundled`] is the shared default instance.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub formulary: Formulary,
    pub beers: BeersList,
    pub stopp: Vec<StoppRule>,
    pub start: Vec<StartRule>,
    pub interactions: InteractionTable,
}

static BUNDLED: LazyLock<ReferenceTables> = LazyLock::new(|| ReferenceTables {
    formulary: Formulary::new(bundled::formulary()),
    beers: BeersList::new(bundled::beers()),
    stopp: bundled::stopp(),
    start: bundled::start(),
    interactions: InteractionTable::new(bundled::interactions()),
});

impl ReferenceTables {
    /// The tables compiled into the crate.
    pub fn bundled() -> &'static ReferenceTables {
        &BUNDLED
    }

    /// Assemble tables from parts and check that they are consistent.
    pub fn from_parts(
        formulary: Vec<DrugEntry>,
        beers: Vec<BeersEntry>,
        stopp: Vec<StoppRule>,
        start: Vec<StartRule>,
        interactions: Vec<InteractionRule>,
    ) -> Result<Self, CriteriaError> {
        let tables = Self {
            formulary: Formulary::new(formulary),
            beers: BeersList::new(beers),
            stopp,
            start,
            interactions: InteractionTable::new(interactions),
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from JSON files in `dir`: `formulary.json`, `beers.json`,
    /// `stopp.json`, `start.json` and `interactions.json`.
    pub fn load(dir: &Path) -> Result<Self, CriteriaError> {
        let tables = Self::from_parts(
            read_json(dir, "formulary.json")?,
            read_json(dir, "beers.json")?,
            read_json(dir, "stopp.json")?,
            read_json(dir, "start.json")?,
            read_json(dir, "interactions.json")?,
        )?;

        info!(
            dir = %dir.display(),
            medications = tables.formulary.entries().len(),
            beers = tables.beers.entries().len(),
            stopp = tables.stopp.len(),
            start = tables.start.len(),
            interactions = tables.interactions.rules().len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    /// Aliases must be unambiguous and every interaction must name
    /// formulary medications.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        self.formulary.validate()?;
        for rule in self.interactions.rules() {
            for drug in [&rule.drug_a, &rule.drug_b] {
                if self.formulary.canonicalize(drug) != Some(drug.as_str()) {
                    return Err(CriteriaError::UnknownMedication(drug.clone()));
                }
            }
        }
        Ok(())
    }

    /// Canonical names of `medications` with duplicates removed, keeping
    /// first-seen order.
    pub fn distinct_canonical<S: AsRef<str>>(&self, medications: &[S]) -> Vec<String> {
        let mut seen = Vec::with_capacity(medications.len());
        for m in medications {
            let canonical = self.formulary.canonical_or_normalized(m.as_ref());
            if !canonical.is_empty() && !seen.contains(&canonical) {
                seen.push(canonical);
            }
        }
        seen
    }
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, CriteriaError> {
    let path = dir.join(file);
    let contents =
        std::fs::read_to_string(&path).map_err(|source| CriteriaError::ReferenceDataLoad {
            path: path.display().to_string(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CriteriaError::ReferenceDataParse {
        file: file.to_string(),
        source,
    })
}
