use std::sync::LazyLock;

use regex::Regex;

use gerikit_core::models::medication::MedicationMention;
use gerikit_criteria::formulary::Formulary;

/// A run of letters (with combining marks, for Hebrew niqqud). Digits split
/// words so "warfarin5mg" still yields "warfarin".
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}[\p{L}\p{M}]*").unwrap());

/// Every medication mention in `text`, in order of appearance.
pub fn recognize_medications(formulary: &Formulary, text: &str) -> Vec<MedicationMention> {
    WORD.find_iter(text)
        .filter_map(|m| {
            let resolved = formulary.resolve_token(m.as_str())?;
            Some(MedicationMention {
                surface: m.as_str().to_string(),
                canonical: resolved.entry.generic.clone(),
                script: resolved.script,
                offset: (m.start(), m.end()),
            })
        })
        .collect()
}

/// Canonical names from `mentions`, duplicates removed, first-seen order.
pub fn distinct_medications(mentions: &[MedicationMention]) -> Vec<String> {
    let mut meds: Vec<String> = Vec::new();
    for mention in mentions {
        if !meds.contains(&mention.canonical) {
            meds.push(mention.canonical.clone());
        }
    }
    meds
}
