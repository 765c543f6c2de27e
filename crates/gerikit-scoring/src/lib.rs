//! gerikit-scoring
//!
//! Geriatric screening instruments as pure functions over their inputs,
//! with no I/O and no shared mutable state. Each instrument defines its items, valid
//! ranges and interpretation bands; totals are plain sums.

pub mod bands;
pub mod error;
pub mod instruments;
pub mod scoring;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use bands::{MmseBand, MorseRisk, interpret_mmse, morse_fall_risk};
pub use scoring::{RiskFactorSet, sum_score};

use error::InstrumentError;
use scoring::{Domain, ScoreEntry, Subscale, ValidationError};

/// The outcome of scoring one instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentScore {
    pub instrument_id: String,
    pub total: f64,
    pub interpretation: String,
    /// Out-of-range items. These are reported, not removed from the total.
    pub validation_errors: Vec<ValidationError>,
}

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "frail", "morse").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "FRAIL Scale", "Morse Fall Scale").
    fn name(&self) -> &str;

    /// The domains and items this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Band label for a total score.
    fn interpret(&self, total: f64) -> &'static str;

    /// Whether any number of positional factors may be supplied, each
    /// checked against the single item definition.
    fn open_ended(&self) -> bool {
        false
    }

    /// All items across all domains, in definition order.
    fn items(&self) -> Vec<&Subscale> {
        self.domains().iter().flat_map(|d| &d.subscales).collect()
    }

    /// Validate a set of score entries against this instrument's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales = self.items();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(out_of_range(self.name(), subscale, entry.value));
            }
        }
        errors
    }

    /// Validate positional factors against the items in definition order.
    ///
    /// Factors beyond the last item are not checked.
    fn validate_factors(&self, factors: &[f64]) -> Vec<ValidationError> {
        let items = self.items();
        factors
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| {
                let item = if self.open_ended() {
                    items.first()
                } else {
                    items.get(i)
                }?;
                (!item.range.contains(value)).then(|| out_of_range(self.name(), item, value))
            })
            .collect()
    }

    /// Score positional factors: sum as-is, interpret, report range problems.
    fn score_factors(&self, factors: &RiskFactorSet) -> InstrumentScore {
        let total = factors.total();
        InstrumentScore {
            instrument_id: self.id().to_string(),
            total,
            interpretation: self.interpret(total).to_string(),
            validation_errors: self.validate_factors(factors.as_slice()),
        }
    }

    /// Score named entries. Entries naming an unknown item, or naming an
    /// item more than once, are rejected.
    fn score_entries(&self, scores: &[ScoreEntry]) -> Result<InstrumentScore, InstrumentError> {
        let items = self.items();
        for (i, entry) in scores.iter().enumerate() {
            if !items.iter().any(|s| s.id == entry.subscale_id) {
                return Err(InstrumentError::UnknownSubscale {
                    instrument_id: self.id().to_string(),
                    subscale_id: entry.subscale_id.clone(),
                });
            }
            if scores[..i].iter().any(|e| e.subscale_id == entry.subscale_id) {
                return Err(InstrumentError::DuplicateSubscale {
                    instrument_id: self.id().to_string(),
                    subscale_id: entry.subscale_id.clone(),
                });
            }
        }

        let values: Vec<f64> = scores.iter().map(|e| e.value).collect();
        let total = sum_score(&values);
        Ok(InstrumentScore {
            instrument_id: self.id().to_string(),
            total,
            interpretation: self.interpret(total).to_string(),
            validation_errors: self.validate_scores(scores),
        })
    }
}

fn out_of_range(instrument: &str, subscale: &Subscale, value: f64) -> ValidationError {
    ValidationError {
        subscale_id: subscale.id.clone(),
        value,
        expected_range: subscale.range,
        score_type: subscale.score_type,
        message: format!(
            "{}: {} score {} is outside range [{}, {}]",
            instrument, subscale.name, value, subscale.range.min, subscale.range.max,
        ),
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::frail::Frail),
        Box::new(instruments::cha2ds2_vasc::Cha2ds2Vasc),
        Box::new(instruments::acb::AnticholinergicBurden),
        Box::new(instruments::morse::MorseFallScale),
        Box::new(instruments::mmse::Mmse),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
