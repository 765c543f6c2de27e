//! Vital-sign extraction. Each pattern set covers both scripts; only the
//! first plausible match of each sign is kept.

use std::sync::LazyLock;

use regex::Regex;

use gerikit_core::models::vitals::VitalSigns;

/// "NNN/NNN", optionally with a unit attached ("120/80mmHg"). The trailing
/// group keeps dates like 12/05/2024 out.
static BLOOD_PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2,3})\s*/\s*(\d{2,3})(?:[^/\d]|$)").unwrap());

static HEART_RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:hr|heart\s+rate|pulse)|\b[והבל]?דופק)\s*(?:[:=]|of|של)?\s*(\d{2,3})(?:\D|$)",
    )
    .unwrap()
});

/// The value must not be followed by more digits. A unit may be attached
/// ("1.8mg/dL") and a sentence-ending period is allowed.
static CREATININE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:creatinine|creat|cr)|\b[והבל]?קריאטינין)\s*(?:[:=]|of|של)?\s*(\d{1,2}(?:\.\d+)?)(?:[^\d.]|\.(?:\D|$)|$)",
    )
    .unwrap()
});

fn plausible_bp(systolic: u32, diastolic: u32) -> bool {
    (50..=300).contains(&systolic) && (20..=200).contains(&diastolic) && systolic > diastolic
}

pub fn extract_blood_pressure(text: &str) -> Option<String> {
    BLOOD_PRESSURE.captures_iter(text).find_map(|caps| {
        let systolic: u32 = caps[1].parse().ok()?;
        let diastolic: u32 = caps[2].parse().ok()?;
        plausible_bp(systolic, diastolic).then(|| format!("{systolic}/{diastolic}"))
    })
}

pub fn extract_heart_rate(text: &str) -> Option<String> {
    HEART_RATE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

pub fn extract_creatinine(text: &str) -> Option<String> {
    CREATININE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

pub fn extract_vitals(text: &str) -> VitalSigns {
    VitalSigns {
        bp: extract_blood_pressure(text),
        hr: extract_heart_rate(text),
        creatinine: extract_creatinine(text),
    }
}
