use gerikit_notes::vitals::{
    extract_blood_pressure, extract_creatinine, extract_heart_rate, extract_vitals,
};

#[test]
fn blood_pressure_first_plausible_match() {
    assert_eq!(extract_blood_pressure("BP 140/90 then 130/80").as_deref(), Some("140/90"));
    assert_eq!(extract_blood_pressure("ל\"ד 150 / 95").as_deref(), Some("150/95"));
    assert_eq!(extract_blood_pressure("no pressure recorded"), None);
}

#[test]
fn dates_are_not_blood_pressure() {
    assert_eq!(extract_blood_pressure("seen on 12/05/2024"), None);
    assert_eq!(
        extract_blood_pressure("seen 12/05/2024, BP 120/70").as_deref(),
        Some("120/70")
    );
}

#[test]
fn heart_rate_after_label() {
    assert_eq!(extract_heart_rate("HR: 72 regular").as_deref(), Some("72"));
    assert_eq!(extract_heart_rate("pulse of 110").as_deref(), Some("110"));
    assert_eq!(extract_heart_rate("Heart rate 58").as_deref(), Some("58"));
    assert_eq!(extract_heart_rate("דופק 64").as_deref(), Some("64"));
    assert_eq!(extract_heart_rate("72 without a label"), None);
}

#[test]
fn units_attached_to_the_number() {
    assert_eq!(extract_blood_pressure("BP 120/80mmHg").as_deref(), Some("120/80"));
    assert_eq!(extract_heart_rate("HR 72bpm").as_deref(), Some("72"));
    assert_eq!(extract_heart_rate("pulse 1100"), None);
}

#[test]
fn creatinine_with_attached_unit() {
    assert_eq!(extract_creatinine("creatinine 1.8mg/dL").as_deref(), Some("1.8"));
    assert_eq!(extract_creatinine("Cr 1.6mg/dl").as_deref(), Some("1.6"));
    assert_eq!(extract_creatinine("Creatinine 2.1.").as_deref(), Some("2.1"));
    assert_eq!(extract_creatinine("creatinine 123"), None);
}

#[test]
fn creatinine_after_label() {
    assert_eq!(extract_creatinine("Creatinine: 1.8 mg/dL").as_deref(), Some("1.8"));
    assert_eq!(extract_creatinine("Cr 0.9").as_deref(), Some("0.9"));
    assert_eq!(extract_creatinine("קריאטינין 2.3").as_deref(), Some("2.3"));
    assert_eq!(extract_creatinine("cream applied"), None);
}

#[test]
fn parsed_accessors() {
    let vitals = extract_vitals("BP 85/50, HR 130, creat 1.2");
    assert_eq!(vitals.blood_pressure(), Some((85, 50)));
    assert_eq!(vitals.heart_rate(), Some(130));
    assert_eq!(vitals.creatinine_value(), Some(1.2));
}
