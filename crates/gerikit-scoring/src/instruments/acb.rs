use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// Anticholinergic Cognitive Burden scale.
///
/// One weight (1–3) per anticholinergic medication; any number of
/// medications may be scored. A total of 3 or more is clinically relevant.
pub struct AnticholinergicBurden;

pub const ACB_HIGH_BURDEN: f64 = 3.0;

impl Instrument for AnticholinergicBurden {
    fn id(&self) -> &str {
        "acb"
    }

    fn name(&self) -> &str {
        "Anticholinergic Cognitive Burden"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "medications".to_string(),
                name: "Medications".to_string(),
                subscales: vec![Subscale {
                    id: "medication_weight".to_string(),
                    name: "Medication ACB weight".to_string(),
                    score_type: ScoreType::Weighted,
                    range: ScoreRange::stepped(0.0, 3.0, 1.0),
                    description: Some(
                        "1: possible, 2-3: definite anticholinergic activity".to_string(),
                    ),
                }],
                composite_score_type: Some(ScoreType::Raw),
                composite_range: None,
                description: Some("3+: increased risk of cognitive impairment".to_string()),
            }]
        });
        &DOMAINS
    }

    fn interpret(&self, total: f64) -> &'static str {
        if total >= ACB_HIGH_BURDEN {
            "High anticholinergic burden"
        } else {
            "Low anticholinergic burden"
        }
    }

    fn open_ended(&self) -> bool {
        true
    }
}
