//! Built-in rule table shipped with the engine.

use std::collections::BTreeMap;

use crate::models::{AdvisoryRecord, DosagePolicy, DosageTier};

/// Default symptom → advisory rows.
pub(super) fn default_symptoms() -> BTreeMap<String, AdvisoryRecord> {
    let mut map = BTreeMap::new();

    for record in [
        AdvisoryRecord::new("fever", "Paracetamol", "500 mg every 6-8 hours (max 4g/day)"),
        AdvisoryRecord::new("headache", "Ibuprofen", "400 mg every 6 hours as needed"),
        AdvisoryRecord::new("cold", "Cetirizine", "10 mg once daily"),
        AdvisoryRecord::new("cough", "Dextromethorphan Syrup", "10 ml every 6 hours"),
    ] {
        map.insert(record.symptom.clone(), record);
    }

    map
}

/// Default age-tiered dosage policies.
pub(super) fn default_policies() -> BTreeMap<String, DosagePolicy> {
    let mut map = BTreeMap::new();

    for policy in [
        DosagePolicy::new(
            "paracetamol",
            vec![
                DosageTier::under(12, "250 mg every 6 hours (max 1g/day)"),
                DosageTier::default_tier("500 mg every 6-8 hours (max 4g/day)"),
            ],
        ),
        DosagePolicy::new(
            "ibuprofen",
            vec![
                DosageTier::under(12, "5-10 mg/kg every 6-8 hours"),
                DosageTier::default_tier("400 mg every 6 hours as needed"),
            ],
        ),
        DosagePolicy::new(
            "cetirizine",
            vec![
                DosageTier::under(6, "2.5 mg once daily"),
                DosageTier::under(12, "5 mg once daily"),
                DosageTier::default_tier("10 mg once daily"),
            ],
        ),
        DosagePolicy::new(
            "dextromethorphan syrup",
            vec![
                DosageTier::under(12, "5 ml every 6 hours"),
                DosageTier::default_tier("10 ml every 6 hours"),
            ],
        ),
    ] {
        map.insert(policy.medicine.clone(), policy);
    }

    map
}

/// Default symptom aliases: spoken phrase → canonical symptom.
pub(super) fn default_symptom_aliases() -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    map.insert("high temperature".into(), "fever".into());
    map.insert("pyrexia".into(), "fever".into());
    map.insert("migraine".into(), "headache".into());
    map.insert("common cold".into(), "cold".into());

    map
}

/// Default medicine aliases: brand/generic name → canonical medicine.
pub(super) fn default_medicine_aliases() -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    // Analgesics
    map.insert("acetaminophen".into(), "paracetamol".into());
    map.insert("tylenol".into(), "paracetamol".into());
    map.insert("advil".into(), "ibuprofen".into());
    map.insert("motrin".into(), "ibuprofen".into());

    // Antihistamines
    map.insert("zyrtec".into(), "cetirizine".into());

    map
}
