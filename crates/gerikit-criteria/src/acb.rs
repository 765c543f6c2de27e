use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gerikit_scoring::Instrument;
use gerikit_scoring::instruments::acb::AnticholinergicBurden;
use gerikit_scoring::sum_score;

use crate::tables::ReferenceTables;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcbWeight {
    pub medication: String,
    pub weight: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcbResult {
    /// Anticholinergic medications only, in input order.
    pub weights: Vec<AcbWeight>,
    pub total: f64,
    pub interpretation: String,
}

/// Anticholinergic Cognitive Burden of a medication list. Each distinct
/// medication counts once; unknown and non-anticholinergic medications
/// contribute nothing.
pub fn anticholinergic_burden<S: AsRef<str>>(
    tables: &ReferenceTables,
    medications: &[S],
) -> AcbResult {
    let weights: Vec<AcbWeight> = tables
        .distinct_canonical(medications)
        .into_iter()
        .filter_map(|m| {
            let weight = tables.formulary.lookup(&m)?.acb;
            (weight > 0).then_some(AcbWeight {
                medication: m,
                weight,
            })
        })
        .collect();

    let factors: Vec<f64> = weights.iter().map(|w| f64::from(w.weight)).collect();
    let total = sum_score(&factors);

    AcbResult {
        weights,
        total,
        interpretation: AnticholinergicBurden.interpret(total).to_string(),
    }
}
