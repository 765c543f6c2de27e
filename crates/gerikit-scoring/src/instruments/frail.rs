use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// FRAIL Scale: Fatigue, Resistance, Ambulation, Illnesses, Loss of weight.
/// Five yes/no items, total 0–5.
pub struct Frail;

impl Instrument for Frail {
    fn id(&self) -> &str {
        "frail"
    }

    fn name(&self) -> &str {
        "FRAIL Scale"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let yes_no = ScoreRange::stepped(0.0, 1.0, 1.0);

            let items = [
                ("fatigue", "Fatigue", "Tired all or most of the time in the past 4 weeks"),
                ("resistance", "Resistance", "Difficulty climbing 10 steps without resting"),
                ("ambulation", "Ambulation", "Difficulty walking 300 m unaided"),
                ("illnesses", "Illnesses", "Five or more chronic illnesses"),
                ("loss_of_weight", "Loss of Weight", "More than 5% weight loss in the past year"),
            ];

            let subscales = items
                .iter()
                .map(|(id, name, description)| Subscale {
                    id: id.to_string(),
                    name: name.to_string(),
                    score_type: ScoreType::Indicator,
                    range: yes_no,
                    description: Some(description.to_string()),
                })
                .collect();

            vec![Domain {
                id: "frail_items".to_string(),
                name: "FRAIL Items".to_string(),
                subscales,
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange::stepped(0.0, 5.0, 1.0)),
                description: Some("0: robust, 1-2: pre-frail, 3-5: frail".to_string()),
            }]
        });
        &DOMAINS
    }

    fn interpret(&self, total: f64) -> &'static str {
        if total >= 3.0 {
            "Frail"
        } else if total >= 1.0 {
            "Pre-frail"
        } else {
            "Robust"
        }
    }
}
