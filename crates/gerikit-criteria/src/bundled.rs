//! Reference content compiled into the crate.
//!
//! The tables keep one record per line so they read as data.

use gerikit_core::models::interaction::Severity;

use crate::beers::BeersEntry;
use crate::formulary::{DrugClass, DrugEntry};
use crate::interactions::InteractionRule;
use crate::stopp::{DrugTarget, StartRule, StoppRule};

use DrugClass::*;

fn drug(
    generic: &str,
    classes: &[DrugClass],
    acb: u8,
    renal_caution: bool,
    aliases: &[&str],
) -> DrugEntry {
    DrugEntry {
        generic: generic.to_string(),
        classes: classes.to_vec(),
        acb,
        renal_caution,
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

#[rustfmt::skip]
pub(crate) fn formulary() -> Vec<DrugEntry> {
    vec![
        drug("warfarin", &[Anticoagulant], 0, false, &["coumadin", "וורפרין", "קומדין"]),
        drug("apixaban", &[Anticoagulant], 0, true, &["eliquis", "אפיקסבן", "אליקוויס"]),
        drug("rivaroxaban", &[Anticoagulant], 0, true, &["xarelto", "ריברוקסבן", "קסרלטו"]),
        drug("dabigatran", &[Anticoagulant], 0, true, &["pradaxa", "דביגטרן", "פרדקסה"]),
        drug("aspirin", &[Antiplatelet], 0, false, &["asa", "micropirin", "cartia", "אספירין", "מיקרופירין", "קרטיה"]),
        drug("clopidogrel", &[Antiplatelet], 0, false, &["plavix", "קלופידוגרל", "פלביקס"]),
        drug("ibuprofen", &[Nsaid], 0, true, &["advil", "nurofen", "איבופרופן", "אדוויל", "נורופן"]),
        drug("naproxen", &[Nsaid], 0, true, &["naxyn", "נפרוקסן", "נקסין"]),
        drug("diclofenac", &[Nsaid], 0, true, &["voltaren", "דיקלופנק", "וולטרן"]),
        drug("paracetamol", &[Analgesic], 0, false, &["acetaminophen", "acamol", "tylenol", "פרצטמול", "אקמול"]),
        drug("tramadol", &[Opioid], 0, true, &["tramadex", "טרמדול", "טרמדקס"]),
        drug("oxycodone", &[Opioid], 0, false, &["oxycontin", "אוקסיקודון", "אוקסיקונטין"]),
        drug("diazepam", &[Benzodiazepine], 1, false, &["valium", "assival", "דיאזפאם", "ואליום", "אסיבל"]),
        drug("lorazepam", &[Benzodiazepine], 0, false, &["lorivan", "ativan", "לורזפאם", "לוריוואן"]),
        drug("clonazepam", &[Benzodiazepine], 0, false, &["clonex", "rivotril", "קלונזפאם", "קלונקס"]),
        drug("zolpidem", &[ZDrug], 0, false, &["stilnox", "זולפידם", "סטילנוקס"]),
        drug("haloperidol", &[Antipsychotic], 1, false, &["haldol", "הלופרידול", "הלדול"]),
        drug("quetiapine", &[Antipsychotic], 3, false, &["seroquel", "קווטיאפין", "סרוקוול"]),
        drug("amitriptyline", &[Antidepressant, Tricyclic], 3, false, &["elatrol", "אמיטריפטילין", "אלטרול"]),
        drug("paroxetine", &[Antidepressant], 3, false, &["seroxat", "פרוקסטין", "סרוקסט"]),
        drug("sertraline", &[Antidepressant], 0, false, &["lustral", "zoloft", "סרטרלין", "לוסטרל"]),
        drug("fluoxetine", &[Antidepressant], 0, false, &["prozac", "prizma", "פלואוקסטין", "פריזמה"]),
        drug("gabapentin", &[Anticonvulsant], 0, true, &["neurontin", "גבפנטין", "נוירונטין"]),
        drug("diphenhydramine", &[Antihistamine, Anticholinergic], 3, false, &["benadryl", "דיפנהידרמין", "בנדריל"]),
        drug("hydroxyzine", &[Antihistamine, Anticholinergic], 3, false, &["atarax", "הידרוקסיזין", "אטרקס"]),
        drug("oxybutynin", &[Anticholinergic], 3, false, &["ditropan", "אוקסיבוטינין", "דיטרופן"]),
        drug("donepezil", &[Cholinesterase], 0, false, &["aricept", "דונפזיל", "אריספט"]),
        drug("digoxin", &[CardiacGlycoside], 1, true, &["lanoxin", "דיגוקסין", "לנוקסין"]),
        drug("amiodarone", &[Antiarrhythmic], 0, false, &["procor", "אמיודרון", "פרוקור"]),
        drug("metoprolol", &[BetaBlocker], 1, false, &["lopresor", "מטופרולול", "לופרסור"]),
        drug("furosemide", &[LoopDiuretic], 1, false, &["fusid", "lasix", "פורוסמיד", "פוסיד"]),
        drug("spironolactone", &[PotassiumSparingDiuretic], 0, true, &["aldactone", "ספירונולקטון", "אלדקטון"]),
        drug("potassium", &[Potassium], 0, true, &["kcl", "אשלגן"]),
        drug("enalapril", &[AceInhibitor], 0, false, &["enaladex", "אנלפריל", "אנלדקס"]),
        drug("ramipril", &[AceInhibitor], 0, false, &["tritace", "רמיפריל", "טריטייס"]),
        drug("losartan", &[Arb], 0, false, &["ocsaar", "cozaar", "לוסרטן", "אוקסאר"]),
        drug("metformin", &[Biguanide], 0, true, &["glucophage", "glucomin", "מטפורמין", "גלוקומין"]),
        drug("glibenclamide", &[Sulfonylurea], 0, true, &["glyburide", "gluben", "גליבנקלמיד", "גלובן"]),
        drug("simvastatin", &[Statin], 0, false, &["simovil", "zocor", "סימבסטטין", "סימוביל"]),
        drug("atorvastatin", &[Statin], 0, false, &["lipitor", "אטורבסטטין", "ליפיטור"]),
        drug("clarithromycin", &[Macrolide], 0, false, &["klacid", "קלריתרומיצין", "קלסיד"]),
        drug("omeprazole", &[Ppi], 0, false, &["omepradex", "losec", "אומפרזול", "אומפרדקס"]),
        drug("alendronate", &[Bisphosphonate], 0, false, &["fosalan", "fosamax", "אלנדרונט", "פוסלן"]),
        drug("levothyroxine", &[Thyroid], 0, false, &["eltroxin", "euthyrox", "לבותירוקסין", "אלטרוקסין"]),
    ]
}

fn beers_entry(drug: &str, category: &str, reason: &str, recommendation: &str) -> BeersEntry {
    BeersEntry {
        drug: drug.to_string(),
        category: category.to_string(),
        reason: reason.to_string(),
        recommendation: recommendation.to_string(),
    }
}

#[rustfmt::skip]
pub(crate) fn beers() -> Vec<BeersEntry> {
    const BENZO: &str = "Increased sensitivity and slower metabolism; cognitive impairment, delirium, falls, fractures";
    const NSAID: &str = "GI bleeding or peptic ulcer, acute kidney injury";
    const ANTIHISTAMINE: &str = "Highly anticholinergic; confusion, dry mouth, constipation";
    const ANTIPSYCHOTIC: &str = "Increased risk of stroke, cognitive decline and mortality in dementia";

    vec![
        beers_entry("diazepam", "Benzodiazepines", BENZO, "Avoid"),
        beers_entry("lorazepam", "Benzodiazepines", BENZO, "Avoid"),
        beers_entry("clonazepam", "Benzodiazepines", BENZO, "Avoid"),
        beers_entry("zolpidem", "Z-drugs", "Delirium, falls and fractures with minimal improvement in sleep", "Avoid"),
        beers_entry("amitriptyline", "Tricyclic antidepressants", "Highly anticholinergic, sedating, orthostatic hypotension", "Avoid"),
        beers_entry("paroxetine", "Antidepressants", "Strongly anticholinergic, sedating", "Avoid"),
        beers_entry("diphenhydramine", "First-generation antihistamines", ANTIHISTAMINE, "Avoid"),
        beers_entry("hydroxyzine", "First-generation antihistamines", ANTIHISTAMINE, "Avoid"),
        beers_entry("oxybutynin", "Antimuscarinics", "Anticholinergic; worsens cognition", "Avoid in dementia"),
        beers_entry("haloperidol", "Antipsychotics", ANTIPSYCHOTIC, "Avoid unless nonpharmacological options failed"),
        beers_entry("quetiapine", "Antipsychotics", ANTIPSYCHOTIC, "Avoid unless nonpharmacological options failed"),
        beers_entry("glibenclamide", "Sulfonylureas", "Prolonged hypoglycemia", "Avoid"),
        beers_entry("ibuprofen", "NSAIDs", NSAID, "Avoid chronic use"),
        beers_entry("naproxen", "NSAIDs", NSAID, "Avoid chronic use"),
        beers_entry("diclofenac", "NSAIDs", NSAID, "Avoid chronic use"),
        beers_entry("digoxin", "Cardiac glycosides", "Toxicity with reduced renal clearance", "Avoid as first line; avoid doses above 0.125 mg/day"),
        beers_entry("amiodarone", "Antiarrhythmics", "Greater toxicity than other antiarrhythmics", "Avoid as first line for atrial fibrillation"),
        beers_entry("aspirin", "Antiplatelets", "Major bleeding risk outweighs benefit in primary prevention", "Avoid for primary prevention"),
        beers_entry("warfarin", "Anticoagulants", "Higher major bleeding risk than direct oral anticoagulants", "Avoid starting as first line"),
        beers_entry("rivaroxaban", "Anticoagulants", "Higher major and GI bleeding risk than apixaban", "Avoid for long-term treatment"),
        beers_entry("omeprazole", "Proton pump inhibitors", "C. difficile infection, bone loss and fractures", "Avoid use beyond 8 weeks"),
    ]
}

fn stopp_rule(id: &str, target: DrugTarget, condition: Option<&str>, reason: &str) -> StoppRule {
    StoppRule {
        id: id.to_string(),
        target,
        condition: condition.map(str::to_string),
        reason: reason.to_string(),
    }
}

#[rustfmt::skip]
pub(crate) fn stopp() -> Vec<StoppRule> {
    use DrugTarget::{Class, Drug};

    vec![
        stopp_rule("D5", Class(Benzodiazepine), None, "Benzodiazepines for 4 weeks or longer: prolonged sedation, confusion, impaired balance"),
        stopp_rule("K1", Class(Benzodiazepine), Some("falls"), "Benzodiazepines in patients with falls: sedation and impaired balance"),
        stopp_rule("K2", Class(Antipsychotic), Some("falls"), "Antipsychotics in patients with falls: gait dyspraxia, parkinsonism"),
        stopp_rule("K4", Class(ZDrug), Some("falls"), "Z-drugs in patients with falls: daytime sedation, ataxia"),
        stopp_rule("K5", Class(Opioid), Some("falls"), "Regular opioids in patients with falls: drowsiness, postural hypotension, vertigo"),
        stopp_rule("D8", Class(Anticholinergic), Some("dementia"), "Anticholinergics in dementia or chronic cognitive impairment: worsening confusion"),
        stopp_rule("D8", Class(Tricyclic), Some("dementia"), "Tricyclic antidepressants in dementia: worsening cognitive impairment"),
        stopp_rule("D2", Class(Tricyclic), Some("glaucoma"), "Tricyclic antidepressants with narrow-angle glaucoma: likely exacerbation"),
        stopp_rule("D6", Class(Antipsychotic), Some("parkinsonism"), "Antipsychotics in parkinsonism or Lewy body disease: severe extrapyramidal symptoms"),
        stopp_rule("H2", Class(Nsaid), Some("ckd"), "NSAIDs with eGFR below 50 ml/min: risk of renal deterioration"),
        stopp_rule("H6", Class(Nsaid), Some("heart_failure"), "NSAIDs in heart failure: exacerbation of heart failure"),
        stopp_rule("H4", Class(Nsaid), Some("hypertension"), "NSAIDs with severe hypertension: exacerbation of hypertension"),
        stopp_rule("E6", Drug("metformin".to_string()), Some("ckd"), "Metformin with eGFR below 30 ml/min: lactic acidosis"),
        stopp_rule("E4", Class(PotassiumSparingDiuretic), Some("ckd"), "Aldosterone antagonists with eGFR below 30 ml/min: hyperkalemia"),
        stopp_rule("J1", Class(Sulfonylurea), Some("diabetes"), "Long-acting sulfonylureas in type 2 diabetes: prolonged hypoglycemia"),
        stopp_rule("F2", Class(Ppi), None, "Proton pump inhibitor at full dose for more than 8 weeks without clear indication"),
        stopp_rule("B7", Drug("digoxin".to_string()), Some("heart_failure"), "Digoxin in heart failure with preserved ejection fraction: no clear benefit"),
    ]
}

fn start_rule(id: &str, condition: &str, recommended: &[DrugClass], reason: &str) -> StartRule {
    StartRule {
        id: id.to_string(),
        condition: condition.to_string(),
        recommended: recommended.to_vec(),
        reason: reason.to_string(),
    }
}

#[rustfmt::skip]
pub(crate) fn start() -> Vec<StartRule> {
    vec![
        start_rule("A1", "atrial_fibrillation", &[Anticoagulant], "Oral anticoagulant in chronic atrial fibrillation"),
        start_rule("A3", "coronary_disease", &[Antiplatelet], "Antiplatelet therapy with documented coronary, cerebral or peripheral vascular disease"),
        start_rule("A5", "coronary_disease", &[Statin], "Statin therapy with documented coronary, cerebral or peripheral vascular disease"),
        start_rule("A6", "heart_failure", &[AceInhibitor, Arb], "ACE inhibitor or ARB in systolic heart failure"),
        start_rule("A7", "heart_failure", &[BetaBlocker], "Beta-blocker in stable systolic heart failure"),
        start_rule("A4", "hypertension", &[AceInhibitor, Arb, BetaBlocker, LoopDiuretic], "Antihypertensive therapy where systolic pressure is consistently above 160 mmHg"),
        start_rule("E4", "osteoporosis", &[Bisphosphonate], "Bone anti-resorptive therapy in documented osteoporosis"),
        start_rule("D3", "dementia", &[Cholinesterase], "Acetylcholinesterase inhibitor for mild to moderate Alzheimer's dementia"),
    ]
}

fn interaction(a: &str, b: &str, severity: Severity, effect: &str) -> InteractionRule {
    InteractionRule {
        drug_a: a.to_string(),
        drug_b: b.to_string(),
        severity,
        effect: effect.to_string(),
    }
}

#[rustfmt::skip]
pub(crate) fn interactions() -> Vec<InteractionRule> {
    use Severity::*;

    const BLEEDING: &str = "Additive anticoagulant and antiplatelet effect: increased bleeding risk";
    const NSAID_BLEEDING: &str = "NSAID with anticoagulant: GI bleeding and raised INR";
    const SEROTONIN: &str = "Serotonin syndrome and lowered seizure threshold";
    const RESPIRATORY: &str = "Opioid with benzodiazepine: profound sedation and respiratory depression";
    const HYPERKALEMIA: &str = "Hyperkalemia";

    vec![
        interaction("warfarin", "aspirin", Major, BLEEDING),
        interaction("warfarin", "clopidogrel", Major, BLEEDING),
        interaction("apixaban", "aspirin", Major, BLEEDING),
        interaction("apixaban", "clopidogrel", Major, BLEEDING),
        interaction("rivaroxaban", "aspirin", Major, BLEEDING),
        interaction("dabigatran", "aspirin", Major, BLEEDING),
        interaction("warfarin", "ibuprofen", Major, NSAID_BLEEDING),
        interaction("warfarin", "naproxen", Major, NSAID_BLEEDING),
        interaction("warfarin", "diclofenac", Major, NSAID_BLEEDING),
        interaction("warfarin", "amiodarone", Major, "Amiodarone inhibits warfarin metabolism: INR rises over weeks"),
        interaction("warfarin", "clarithromycin", Major, "CYP inhibition raises INR"),
        interaction("warfarin", "simvastatin", Moderate, "May increase INR"),
        interaction("warfarin", "paracetamol", Moderate, "Regular paracetamol above 2 g/day can raise INR"),
        interaction("warfarin", "sertraline", Moderate, "SSRIs impair platelet function: bleeding risk"),
        interaction("warfarin", "fluoxetine", Moderate, "SSRIs impair platelet function: bleeding risk"),
        interaction("aspirin", "ibuprofen", Moderate, "Ibuprofen blocks aspirin's antiplatelet effect; additive GI toxicity"),
        interaction("clopidogrel", "omeprazole", Moderate, "Omeprazole reduces clopidogrel activation (CYP2C19)"),
        interaction("digoxin", "amiodarone", Major, "Amiodarone raises digoxin levels: toxicity"),
        interaction("digoxin", "clarithromycin", Major, "P-glycoprotein inhibition raises digoxin levels"),
        interaction("digoxin", "furosemide", Moderate, "Diuretic hypokalemia potentiates digoxin toxicity"),
        interaction("simvastatin", "clarithromycin", Contraindicated, "Markedly raised statin levels: rhabdomyolysis"),
        interaction("simvastatin", "amiodarone", Major, "Myopathy risk; limit simvastatin to 20 mg"),
        interaction("atorvastatin", "clarithromycin", Major, "Raised statin levels: myopathy"),
        interaction("enalapril", "spironolactone", Major, HYPERKALEMIA),
        interaction("ramipril", "spironolactone", Major, HYPERKALEMIA),
        interaction("losartan", "spironolactone", Major, HYPERKALEMIA),
        interaction("enalapril", "potassium", Major, HYPERKALEMIA),
        interaction("ramipril", "potassium", Major, HYPERKALEMIA),
        interaction("spironolactone", "potassium", Contraindicated, "Severe hyperkalemia"),
        interaction("metoprolol", "amiodarone", Moderate, "Bradycardia and AV block"),
        interaction("tramadol", "sertraline", Major, SEROTONIN),
        interaction("tramadol", "fluoxetine", Major, SEROTONIN),
        interaction("tramadol", "paroxetine", Major, SEROTONIN),
        interaction("oxycodone", "diazepam", Major, RESPIRATORY),
        interaction("oxycodone", "lorazepam", Major, RESPIRATORY),
        interaction("oxycodone", "clonazepam", Major, RESPIRATORY),
        interaction("tramadol", "diazepam", Major, RESPIRATORY),
        interaction("glibenclamide", "clarithromycin", Moderate, "Raised sulfonylurea levels: hypoglycemia"),
        interaction("donepezil", "oxybutynin", Moderate, "Opposing cholinergic effects: both drugs less effective"),
        interaction("levothyroxine", "omeprazole", Minor, "Reduced levothyroxine absorption"),
    ]
}
