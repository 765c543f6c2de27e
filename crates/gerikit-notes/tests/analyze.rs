use gerikit_core::models::advisory::AdvisoryCode;
use gerikit_core::models::medication::Script;
use gerikit_criteria::ReferenceTables;
use gerikit_notes::{NoteAnalyzer, analyze_note};

fn codes(text: &str) -> Vec<AdvisoryCode> {
    analyze_note(text).advisories.iter().map(|a| a.code).collect()
}

#[test]
fn warfarin_and_aspirin_raise_critical_bleeding_risk() {
    let analysis = analyze_note("Continues warfarin 5 mg daily. Started aspirin 100 mg.");
    assert_eq!(analysis.medications, ["warfarin", "aspirin"]);

    let bleeding = analysis
        .advisories
        .iter()
        .find(|a| a.code == AdvisoryCode::BleedingRisk)
        .expect("bleeding advisory");
    assert!(bleeding.critical);
    assert!(analysis.has_critical());
}

#[test]
fn bleeding_risk_fires_across_scripts_and_case() {
    for text in [
        "WARFARIN and Aspirin",
        "המטופל נוטל וורפרין ואספירין",
        "on Coumadin, also מיקרופירין",
    ] {
        let analysis = analyze_note(text);
        assert!(
            analysis
                .critical_advisories()
                .any(|a| a.code == AdvisoryCode::BleedingRisk),
            "no bleeding advisory for {text:?}"
        );
    }
}

#[test]
fn mentions_record_script_and_offsets() {
    let text = "נוטל וורפרין and aspirin";
    let analysis = analyze_note(text);
    assert_eq!(analysis.mentions.len(), 2);

    let hebrew = &analysis.mentions[0];
    assert_eq!(hebrew.canonical, "warfarin");
    assert_eq!(hebrew.script, Script::Hebrew);
    assert_eq!(&text[hebrew.offset.0..hebrew.offset.1], "וורפרין");

    assert_eq!(analysis.mentions[1].script, Script::Latin);
}

#[test]
fn repeated_mentions_count_once() {
    let analysis = analyze_note("aspirin. Aspirin again. אספירין.");
    assert_eq!(analysis.mentions.len(), 3);
    assert_eq!(analysis.medications, ["aspirin"]);
}

#[test]
fn polypharmacy_above_threshold() {
    let five = "metformin simvastatin omeprazole levothyroxine alendronate";
    assert!(!codes(five).contains(&AdvisoryCode::Polypharmacy));

    let six = format!("{five} paracetamol");
    let analysis = analyze_note(&six);
    assert_eq!(analysis.medications.len(), 6);
    let poly = analysis
        .advisories
        .iter()
        .find(|a| a.code == AdvisoryCode::Polypharmacy)
        .expect("polypharmacy advisory");
    assert!(!poly.critical);
}

#[test]
fn text_without_recognized_tokens_is_empty() {
    let analysis = analyze_note("Patient walked in the garden and feels well today.");
    assert!(analysis.medications.is_empty());
    assert!(analysis.advisories.is_empty());
    assert!(analysis.mentions.is_empty());

    let empty = analyze_note("");
    assert!(empty.medications.is_empty());
    assert!(empty.advisories.is_empty());
    assert!(empty.vital_alerts.is_empty());
    assert!(empty.vitals.is_empty());

    let vitals_only = analyze_note("BP 200/120, HR 40, creatinine 3.0");
    assert!(vitals_only.medications.is_empty());
    assert!(vitals_only.advisories.is_empty());
}

#[test]
fn rules_fire_independently() {
    let codes = codes("warfarin, apixaban, aspirin, diazepam");
    assert!(codes.contains(&AdvisoryCode::BleedingRisk));
    assert!(codes.contains(&AdvisoryCode::DuplicateAnticoagulant));
    assert!(codes.contains(&AdvisoryCode::Interaction));
    assert!(codes.contains(&AdvisoryCode::Beers));
    assert!(!codes.contains(&AdvisoryCode::Polypharmacy));
}

#[test]
fn interaction_advisory_criticality_follows_severity() {
    let analysis = analyze_note("levothyroxine with omeprazole");
    let interaction = analysis
        .advisories
        .iter()
        .find(|a| a.code == AdvisoryCode::Interaction)
        .unwrap();
    assert!(!interaction.critical);

    let analysis = analyze_note("simvastatin and clarithromycin");
    let interaction = analysis
        .advisories
        .iter()
        .find(|a| a.code == AdvisoryCode::Interaction)
        .unwrap();
    assert!(interaction.critical);
    assert!(interaction.message.starts_with("Contraindicated interaction"));
}

#[test]
fn anticholinergic_and_cns_rules() {
    let codes = codes("amitriptyline at night, oxybutynin, lorazepam, zolpidem");
    assert!(codes.contains(&AdvisoryCode::AnticholinergicBurden));
    assert!(codes.contains(&AdvisoryCode::CnsPolypharmacy));
}

#[test]
fn vital_sign_rules() {
    let analysis = analyze_note("BP 190/100, HR 44, creatinine 2.1 on metformin");
    assert_eq!(analysis.vitals.bp.as_deref(), Some("190/100"));
    assert_eq!(analysis.vitals.hr.as_deref(), Some("44"));
    assert_eq!(analysis.vitals.creatinine.as_deref(), Some("2.1"));

    let alerts: Vec<AdvisoryCode> = analysis.vital_alerts.iter().map(|a| a.code).collect();
    assert_eq!(alerts, [AdvisoryCode::HypertensiveUrgency, AdvisoryCode::Bradycardia]);

    let codes: Vec<AdvisoryCode> = analysis.advisories.iter().map(|a| a.code).collect();
    assert!(codes.contains(&AdvisoryCode::RenalDosing));
    assert!(!codes.contains(&AdvisoryCode::HypertensiveUrgency));
    assert!(analysis.has_critical());
}

#[test]
fn creatinine_with_attached_unit_triggers_renal_dosing() {
    let analysis = analyze_note("creatinine 1.8mg/dL, continues metformin");
    assert_eq!(analysis.vitals.creatinine.as_deref(), Some("1.8"));
    assert!(
        analysis
            .advisories
            .iter()
            .any(|a| a.code == AdvisoryCode::RenalDosing)
    );
}

#[test]
fn vitals_only_note_has_alerts_but_no_advisories() {
    let analysis = analyze_note("BP 200/120, HR 40");
    assert!(analysis.medications.is_empty());
    assert!(analysis.advisories.is_empty());
    assert_eq!(analysis.vital_alerts.len(), 2);
    assert!(analysis.vital_alerts.iter().all(|a| a.critical));
}

#[test]
fn renal_rule_needs_a_renally_cleared_drug() {
    let codes = codes("Cr 2.4, taking simvastatin");
    assert!(!codes.contains(&AdvisoryCode::RenalDosing));
}

#[test]
fn analysis_is_pure() {
    let text = "warfarin aspirin BP 150/90";
    assert_eq!(analyze_note(text), analyze_note(text));
}

#[test]
fn analyzer_uses_injected_tables() {
    let empty = ReferenceTables::default();
    let analysis = NoteAnalyzer::new(&empty).analyze("warfarin and aspirin");
    assert!(analysis.medications.is_empty());
    assert!(analysis.advisories.is_empty());
}
