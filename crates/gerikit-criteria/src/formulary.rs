//! Medication formulary and the bilingual alias table.
//!
//! Every recognized surface form (generic or brand, Latin or Hebrew script)
//! maps to exactly one canonical lower-case generic name. Recognition is a
//! plain table lookup; tokenizing text is the caller's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gerikit_core::models::medication::{Script, is_hebrew, normalize_name};

use crate::error::CriteriaError;

/// Pharmacological class used by the STOPP/START rules and the note
/// analyzer's decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DrugClass {
    Anticoagulant,
    Antiplatelet,
    Nsaid,
    Analgesic,
    Opioid,
    Benzodiazepine,
    ZDrug,
    Antipsychotic,
    Antidepressant,
    Tricyclic,
    Anticonvulsant,
    Antihistamine,
    Anticholinergic,
    Cholinesterase,
    CardiacGlycoside,
    Antiarrhythmic,
    BetaBlocker,
    AceInhibitor,
    Arb,
    LoopDiuretic,
    PotassiumSparingDiuretic,
    Potassium,
    Biguanide,
    Sulfonylurea,
    Statin,
    Macrolide,
    Ppi,
    Bisphosphonate,
    Thyroid,
}

impl DrugClass {
    /// Classes that act on the central nervous system (falls risk when
    /// combined).
    pub fn is_cns_active(&self) -> bool {
        matches!(
            self,
            DrugClass::Opioid
                | DrugClass::Benzodiazepine
                | DrugClass::ZDrug
                | DrugClass::Antipsychotic
                | DrugClass::Antidepressant
                | DrugClass::Tricyclic
                | DrugClass::Anticonvulsant
        )
    }
}

/// One formulary medication with its classes and aliases.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugEntry {
    /// Canonical lower-case generic name.
    pub generic: String,
    pub classes: Vec<DrugClass>,
    /// Anticholinergic Cognitive Burden weight, 0 when not anticholinergic.
    #[serde(default)]
    pub acb: u8,
    /// Needs dose review when renal function is reduced.
    #[serde(default)]
    pub renal_caution: bool,
    /// Brand names and other-script spellings. The generic name itself is
    /// always an alias and need not be listed.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl DrugEntry {
    pub fn has_class(&self, class: DrugClass) -> bool {
        self.classes.contains(&class)
    }
}

/// Hebrew one-letter proclitics written joined to the next word
/// (and, the, in, to, from, that, as).
const HEBREW_PREFIXES: [char; 7] = ['ו', 'ה', 'ב', 'ל', 'מ', 'ש', 'כ'];

/// A surface form resolved against the formulary.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub entry: &'a DrugEntry,
    pub script: Script,
}

#[derive(Debug, Clone, Default)]
pub struct Formulary {
    entries: Vec<DrugEntry>,
    /// alias (normalized) -> index into `entries`
    index: HashMap<String, usize>,
    conflicts: Vec<(String, usize, usize)>,
}

impl Formulary {
    /// Build the alias index. When two entries claim the same alias the
    /// first one wins and the clash is kept for [`Formulary::validate`].
    pub fn new(mut entries: Vec<DrugEntry>) -> Self {
        for entry in &mut entries {
            entry.generic = normalize_name(&entry.generic);
        }

        let mut index = HashMap::new();
        let mut conflicts = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            let forms = std::iter::once(&entry.generic).chain(entry.aliases.iter());
            for form in forms {
                let key = normalize_name(form);
                match index.get(&key).copied() {
                    Some(existing) if existing != i => conflicts.push((key, existing, i)),
                    Some(_) => {}
                    None => {
                        index.insert(key, i);
                    }
                }
            }
        }

        if !conflicts.is_empty() {
            tracing::warn!(count = conflicts.len(), "formulary has conflicting aliases");
        }

        Self {
            entries,
            index,
            conflicts,
        }
    }

    /// Fail on the first alias claimed by two different medications.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        match self.conflicts.first() {
            Some((alias, first, second)) => Err(CriteriaError::DuplicateAlias {
                alias: alias.clone(),
                first: self.entries[*first].generic.clone(),
                second: self.entries[*second].generic.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn entries(&self) -> &[DrugEntry] {
        &self.entries
    }

    /// Look up an exact surface form (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<&DrugEntry> {
        self.index
            .get(&normalize_name(name))
            .map(|&i| &self.entries[i])
    }

    /// Resolve a single word from free text. Hebrew words carrying an
    /// attached prefix are retried with the prefix removed, but only when
    /// the full word is not itself a known alias.
    pub fn resolve_token(&self, token: &str) -> Option<Resolved<'_>> {
        let script = Script::of(token);
        if let Some(entry) = self.lookup(token) {
            return Some(Resolved { entry, script });
        }
        if script != Script::Hebrew {
            return None;
        }

        let mut chars = token.chars();
        let first = chars.next()?;
        let rest = chars.as_str();
        if HEBREW_PREFIXES.contains(&first)
            && rest.chars().count() > 1
            && rest.chars().all(is_hebrew)
        {
            return self.lookup(rest).map(|entry| Resolved { entry, script });
        }
        None
    }

    /// Canonical generic name for a surface form, if known.
    pub fn canonicalize(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|e| e.generic.as_str())
    }

    /// Canonical name when known, otherwise the lower-cased input, so
    /// criteria tables can still match medications missing from the
    /// formulary.
    pub fn canonical_or_normalized(&self, name: &str) -> String {
        match self.canonicalize(name) {
            Some(generic) => generic.to_string(),
            None => normalize_name(name),
        }
    }

    /// Every surface form that maps to the given canonical name.
    pub fn aliases_of(&self, canonical: &str) -> Option<&[String]> {
        self.lookup(canonical)
            .filter(|e| e.generic == normalize_name(canonical))
            .map(|e| e.aliases.as_slice())
    }

    pub fn has_class(&self, name: &str, class: DrugClass) -> bool {
        self.lookup(name).is_some_and(|e| e.has_class(class))
    }
}
