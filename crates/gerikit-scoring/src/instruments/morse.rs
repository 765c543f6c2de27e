use crate::bands::morse_fall_risk;
use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// Morse Fall Scale. Six items with fixed point values, total 0–125.
pub struct MorseFallScale;

impl Instrument for MorseFallScale {
    fn id(&self) -> &str {
        "morse"
    }

    fn name(&self) -> &str {
        "Morse Fall Scale"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "morse_items".to_string(),
                name: "Morse Items".to_string(),
                subscales: vec![
                    item("history_of_falling", "History of falling", 25.0, 25.0, "No 0, Yes 25"),
                    item("secondary_diagnosis", "Secondary diagnosis", 15.0, 15.0, "No 0, Yes 15"),
                    item(
                        "ambulatory_aid",
                        "Ambulatory aid",
                        30.0,
                        15.0,
                        "None/bed rest/nurse 0, crutches/cane/walker 15, furniture 30",
                    ),
                    item("iv_access", "IV or heparin lock", 20.0, 20.0, "No 0, Yes 20"),
                    item("gait", "Gait", 20.0, 10.0, "Normal 0, weak 10, impaired 20"),
                    item(
                        "mental_status",
                        "Mental status",
                        15.0,
                        15.0,
                        "Oriented to own ability 0, overestimates or forgets limitations 15",
                    ),
                ],
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange::stepped(0.0, 125.0, 5.0)),
                description: Some("0-24: low, 25-44: moderate, 45+: high".to_string()),
            }]
        });
        &DOMAINS
    }

    fn interpret(&self, total: f64) -> &'static str {
        morse_fall_risk(total).label()
    }
}

fn item(id: &str, name: &str, max: f64, step: f64, description: &str) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Weighted,
        range: ScoreRange::stepped(0.0, max, step),
        description: Some(description.to_string()),
    }
}
