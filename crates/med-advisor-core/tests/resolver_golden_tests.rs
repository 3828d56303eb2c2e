//! Golden tests for the resolution engine.
//!
//! These tests verify symptom and dosage resolution against known cases.

use med_advisor_core::models::DosageSource;
use med_advisor_core::resolver::{DosageResolver, Normalizer, PlaceholderAlternatives, SymptomResolver};
use med_advisor_core::RuleSet;

/// Symptom case from golden file.
struct SymptomCase {
    id: &'static str,
    input: &'static str,
    expected_medicines: &'static [&'static str],
}

/// Dosage case from golden file.
struct DosageCase {
    id: &'static str,
    medicine: &'static str,
    age: Option<i64>,
    expected_dose: &'static str,
    expected_source: DosageSource,
}

fn get_symptom_cases() -> Vec<SymptomCase> {
    vec![
        SymptomCase {
            id: "fever-headache",
            input: "fever, headache",
            expected_medicines: &["Paracetamol", "Ibuprofen"],
        },
        SymptomCase {
            id: "mixed-case-whitespace",
            input: "  COLD ,Cough  ",
            expected_medicines: &["Cetirizine", "Dextromethorphan Syrup"],
        },
        SymptomCase {
            id: "unknown-symptom",
            input: "unknown_symptom",
            expected_medicines: &[],
        },
        SymptomCase {
            id: "partial-match",
            input: "rash, fever, itching",
            expected_medicines: &["Paracetamol"],
        },
        SymptomCase {
            id: "duplicates-kept",
            input: "fever, FEVER",
            expected_medicines: &["Paracetamol", "Paracetamol"],
        },
        SymptomCase {
            id: "stray-commas",
            input: ",,headache,,",
            expected_medicines: &["Ibuprofen"],
        },
        SymptomCase {
            id: "empty-input",
            input: "",
            expected_medicines: &[],
        },
        SymptomCase {
            id: "alias-expansion",
            input: "high temperature, migraine, common cold",
            expected_medicines: &["Paracetamol", "Ibuprofen", "Cetirizine"],
        },
    ]
}

fn get_dosage_cases() -> Vec<DosageCase> {
    vec![
        DosageCase {
            id: "paracetamol-child",
            medicine: "Paracetamol",
            age: Some(8),
            expected_dose: "250 mg every 6 hours (max 1g/day)",
            expected_source: DosageSource::AgeTier,
        },
        DosageCase {
            id: "paracetamol-boundary",
            medicine: "Paracetamol",
            age: Some(12),
            expected_dose: "500 mg every 6-8 hours (max 4g/day)",
            expected_source: DosageSource::DefaultTier,
        },
        DosageCase {
            id: "paracetamol-adult",
            medicine: "Paracetamol",
            age: Some(30),
            expected_dose: "500 mg every 6-8 hours (max 4g/day)",
            expected_source: DosageSource::DefaultTier,
        },
        DosageCase {
            id: "paracetamol-no-age",
            medicine: "paracetamol",
            age: None,
            expected_dose: "500 mg every 6-8 hours (max 4g/day)",
            expected_source: DosageSource::DefaultTier,
        },
        DosageCase {
            id: "ibuprofen-child",
            medicine: "Ibuprofen",
            age: Some(11),
            expected_dose: "5-10 mg/kg every 6-8 hours",
            expected_source: DosageSource::AgeTier,
        },
        DosageCase {
            id: "cetirizine-toddler",
            medicine: "Cetirizine",
            age: Some(2),
            expected_dose: "2.5 mg once daily",
            expected_source: DosageSource::AgeTier,
        },
        DosageCase {
            id: "syrup-adult",
            medicine: "Dextromethorphan Syrup",
            age: Some(65),
            expected_dose: "10 ml every 6 hours",
            expected_source: DosageSource::DefaultTier,
        },
        DosageCase {
            id: "negative-age",
            medicine: "Paracetamol",
            age: Some(-3),
            expected_dose: "250 mg every 6 hours (max 1g/day)",
            expected_source: DosageSource::AgeTier,
        },
        DosageCase {
            id: "aspirin-uncurated",
            medicine: "Aspirin",
            age: None,
            expected_dose: "Standard dosage for Aspirin",
            expected_source: DosageSource::Uncurated,
        },
        DosageCase {
            id: "brand-alias",
            medicine: "Advil",
            age: Some(40),
            expected_dose: "400 mg every 6 hours as needed",
            expected_source: DosageSource::DefaultTier,
        },
    ]
}

#[test]
fn test_golden_symptom_cases() {
    let rules = RuleSet::builtin();
    let normalizer = Normalizer::new(&rules);
    let resolver = SymptomResolver::new(&rules);

    for case in get_symptom_cases() {
        let tokens = normalizer.normalize(case.input);
        let medicines: Vec<String> = resolver
            .resolve(&tokens)
            .into_iter()
            .map(|r| r.medicine)
            .collect();

        assert_eq!(medicines, case.expected_medicines, "Failed case: {}", case.id);
    }
}

#[test]
fn test_golden_dosage_cases() {
    let rules = RuleSet::builtin();
    let resolver = DosageResolver::new(&rules, &PlaceholderAlternatives);

    for case in get_dosage_cases() {
        let result = resolver.resolve(case.medicine, case.age);

        assert_eq!(result.dosage, case.expected_dose, "Dose mismatch for case: {}", case.id);
        assert_eq!(result.source, case.expected_source, "Source mismatch for case: {}", case.id);
        assert_eq!(result.alternatives.len(), 2, "Alternatives for case: {}", case.id);
    }
}

#[test]
fn test_fever_headache_records() {
    let rules = RuleSet::builtin();
    let tokens = Normalizer::new(&rules).normalize("fever, headache");
    let records = SymptomResolver::new(&rules).resolve(&tokens);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].symptom, "fever");
    assert_eq!(records[0].dosage, "500 mg every 6-8 hours (max 4g/day)");
    assert_eq!(records[1].symptom, "headache");
    assert_eq!(records[1].dosage, "400 mg every 6 hours as needed");
}
