use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// CHA2DS2-VASc: stroke risk in atrial fibrillation. Total 0–9.
pub struct Cha2ds2Vasc;

impl Instrument for Cha2ds2Vasc {
    fn id(&self) -> &str {
        "cha2ds2_vasc"
    }

    fn name(&self) -> &str {
        "CHA2DS2-VASc"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "risk_factors".to_string(),
                name: "Risk Factors".to_string(),
                subscales: vec![
                    factor("chf", "Congestive heart failure", 1.0),
                    factor("hypertension", "Hypertension", 1.0),
                    factor("age_75", "Age 75 or older", 2.0),
                    factor("diabetes", "Diabetes mellitus", 1.0),
                    factor("stroke", "Prior stroke, TIA or thromboembolism", 2.0),
                    factor("vascular", "Vascular disease", 1.0),
                    factor("age_65_74", "Age 65 to 74", 1.0),
                    factor("female", "Female sex", 1.0),
                ],
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange::stepped(0.0, 9.0, 1.0)),
                description: Some(
                    "0: low, 1: moderate (consider anticoagulation), 2+: high".to_string(),
                ),
            }]
        });
        &DOMAINS
    }

    fn interpret(&self, total: f64) -> &'static str {
        if total >= 2.0 {
            "High risk"
        } else if total >= 1.0 {
            "Moderate risk"
        } else {
            "Low risk"
        }
    }
}

fn factor(id: &str, name: &str, points: f64) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type: if points > 1.0 {
            ScoreType::Weighted
        } else {
            ScoreType::Indicator
        },
        range: ScoreRange::stepped(0.0, points, points),
        description: None,
    }
}
