use crate::bands::interpret_mmse;
use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// MMSE: Mini-Mental State Examination. Eleven sections, total 0–30.
pub struct Mmse;

impl Instrument for Mmse {
    fn id(&self) -> &str {
        "mmse"
    }

    fn name(&self) -> &str {
        "MMSE"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                domain(
                    "orientation",
                    "Orientation",
                    vec![
                        section("orientation_time", "Orientation to time", 5.0),
                        section("orientation_place", "Orientation to place", 5.0),
                    ],
                ),
                domain(
                    "memory",
                    "Registration and Recall",
                    vec![
                        section("registration", "Registration", 3.0),
                        section("recall", "Recall", 3.0),
                    ],
                ),
                domain(
                    "attention",
                    "Attention and Calculation",
                    vec![section("attention", "Serial sevens or spelling backwards", 5.0)],
                ),
                domain(
                    "language",
                    "Language and Praxis",
                    vec![
                        section("naming", "Naming", 2.0),
                        section("repetition", "Repetition", 1.0),
                        section("three_stage_command", "Three-stage command", 3.0),
                        section("reading", "Reading", 1.0),
                        section("writing", "Writing", 1.0),
                        section("copying", "Copying", 1.0),
                    ],
                ),
            ]
        });
        &DOMAINS
    }

    fn interpret(&self, total: f64) -> &'static str {
        interpret_mmse(total).label()
    }
}

fn domain(id: &str, name: &str, subscales: Vec<Subscale>) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales,
        composite_score_type: Some(ScoreType::Raw),
        composite_range: None,
        description: None,
    }
}

fn section(id: &str, name: &str, max: f64) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Correct,
        range: ScoreRange::stepped(0.0, max, 1.0),
        description: None,
    }
}
