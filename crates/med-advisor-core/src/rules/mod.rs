//! Static rule table and dosage policy configuration.
//!
//! A [`RuleSet`] is built once, either from the built-in table or from a JSON
//! document, and then shared read-only with every resolver.

mod builtin;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AdvisoryRecord, DosagePolicy};
use crate::resolver::canonicalize;

/// Rule configuration errors.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate symptom key: {0}")]
    DuplicateSymptom(String),

    #[error("Duplicate dosage policy: {0}")]
    DuplicatePolicy(String),

    #[error("Duplicate age threshold {threshold} for {medicine}")]
    DuplicateThreshold { medicine: String, threshold: i64 },

    #[error("Multiple default tiers for {0}")]
    MultipleDefaults(String),

    #[error("Empty key in {0}")]
    EmptyKey(&'static str),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Alias {alias} in {section} shadows an existing key")]
    AliasShadowsKey { section: &'static str, alias: String },
}

pub type RuleResult<T> = Result<T, RuleError>;

/// Tunables that travel with the rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorSettings {
    /// Number of alternative descriptors generated per medicine
    #[serde(default = "default_alternatives_per_medicine")]
    pub alternatives_per_medicine: usize,
    /// Minimum Jaro-Winkler similarity for a symptom suggestion (0.0 - 1.0)
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f64,
}

fn default_alternatives_per_medicine() -> usize {
    2
}

/// Allowed range for `alternatives_per_medicine`.
const ALTERNATIVES_RANGE: std::ops::RangeInclusive<usize> = 1..=16;

fn default_suggestion_threshold() -> f64 {
    0.85
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            alternatives_per_medicine: default_alternatives_per_medicine(),
            suggestion_threshold: default_suggestion_threshold(),
        }
    }
}

/// Serialized form of a rule set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleDocument {
    pub symptoms: Vec<AdvisoryRecord>,
    #[serde(default)]
    pub dosage_policies: Vec<DosagePolicy>,
    #[serde(default)]
    pub symptom_aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub medicine_aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub settings: AdvisorSettings,
}

/// Immutable rule table shared by all resolvers.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    symptoms: BTreeMap<String, AdvisoryRecord>,
    policies: BTreeMap<String, DosagePolicy>,
    symptom_aliases: BTreeMap<String, String>,
    medicine_aliases: BTreeMap<String, String>,
    settings: AdvisorSettings,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// The built-in rule table.
    pub fn builtin() -> Self {
        Self {
            symptoms: builtin::default_symptoms(),
            policies: builtin::default_policies(),
            symptom_aliases: builtin::default_symptom_aliases(),
            medicine_aliases: builtin::default_medicine_aliases(),
            settings: AdvisorSettings::default(),
        }
    }

    /// Parse and validate a JSON rule document.
    pub fn from_json(json: &str) -> RuleResult<Self> {
        let document: RuleDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load a JSON rule document from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RuleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate a document and canonicalize its keys.
    pub fn from_document(document: RuleDocument) -> RuleResult<Self> {
        let settings = document.settings;
        if !(0.0..=1.0).contains(&settings.suggestion_threshold) {
            return Err(RuleError::InvalidSetting(format!(
                "suggestion_threshold {} outside 0.0..=1.0",
                settings.suggestion_threshold
            )));
        }
        if !ALTERNATIVES_RANGE.contains(&settings.alternatives_per_medicine) {
            return Err(RuleError::InvalidSetting(format!(
                "alternatives_per_medicine {} outside {}..={}",
                settings.alternatives_per_medicine,
                ALTERNATIVES_RANGE.start(),
                ALTERNATIVES_RANGE.end()
            )));
        }

        let mut symptoms = BTreeMap::new();
        for mut record in document.symptoms {
            let key = non_empty_key(&record.symptom, "symptoms")?;
            if symptoms.contains_key(&key) {
                return Err(RuleError::DuplicateSymptom(key));
            }
            record.symptom = key.clone();
            symptoms.insert(key, record);
        }

        let mut policies = BTreeMap::new();
        for mut policy in document.dosage_policies {
            let key = non_empty_key(&policy.medicine, "dosage_policies")?;
            if policies.contains_key(&key) {
                return Err(RuleError::DuplicatePolicy(key));
            }
            validate_tiers(&key, &policy)?;
            if policy.default_tier().is_none() {
                tracing::warn!(medicine = %key, "Dosage policy has no default tier");
            }
            policy.medicine = key.clone();
            policy.sort_tiers();
            policies.insert(key, policy);
        }

        let symptom_aliases = canonical_aliases(document.symptom_aliases, "symptom_aliases")?;
        check_aliases(&symptom_aliases, &symptoms, "symptom_aliases")?;
        let medicine_aliases = canonical_aliases(document.medicine_aliases, "medicine_aliases")?;
        check_aliases(&medicine_aliases, &policies, "medicine_aliases")?;

        tracing::info!(
            symptoms = symptoms.len(),
            policies = policies.len(),
            aliases = symptom_aliases.len() + medicine_aliases.len(),
            "Loaded rule set"
        );

        Ok(Self {
            symptoms,
            policies,
            symptom_aliases,
            medicine_aliases,
            settings,
        })
    }

    /// Export as a serializable document.
    pub fn to_document(&self) -> RuleDocument {
        RuleDocument {
            symptoms: self.symptoms.values().cloned().collect(),
            dosage_policies: self.policies.values().cloned().collect(),
            symptom_aliases: self.symptom_aliases.clone(),
            medicine_aliases: self.medicine_aliases.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> RuleResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Look up an advisory record by canonical symptom key.
    pub fn symptom(&self, key: &str) -> Option<&AdvisoryRecord> {
        self.symptoms.get(key)
    }

    /// Look up a dosage policy by canonical medicine key.
    pub fn policy(&self, key: &str) -> Option<&DosagePolicy> {
        self.policies.get(key)
    }

    /// Canonical symptom a spoken alias maps to.
    pub fn symptom_alias(&self, key: &str) -> Option<&str> {
        self.symptom_aliases.get(key).map(String::as_str)
    }

    /// Canonical medicine a brand/generic alias maps to.
    pub fn medicine_alias(&self, key: &str) -> Option<&str> {
        self.medicine_aliases.get(key).map(String::as_str)
    }

    /// All canonical symptom keys, sorted.
    pub fn symptom_keys(&self) -> impl Iterator<Item = &str> {
        self.symptoms.keys().map(String::as_str)
    }

    pub fn settings(&self) -> &AdvisorSettings {
        &self.settings
    }
}

fn non_empty_key(raw: &str, section: &'static str) -> RuleResult<String> {
    let key = canonicalize(raw);
    if key.is_empty() {
        return Err(RuleError::EmptyKey(section));
    }
    Ok(key)
}

fn validate_tiers(medicine: &str, policy: &DosagePolicy) -> RuleResult<()> {
    let mut thresholds = BTreeSet::new();
    let mut defaults = 0;

    for tier in &policy.tiers {
        match tier.max_age_exclusive {
            Some(threshold) => {
                if !thresholds.insert(threshold) {
                    return Err(RuleError::DuplicateThreshold {
                        medicine: medicine.to_string(),
                        threshold,
                    });
                }
            }
            None => defaults += 1,
        }
    }

    if defaults > 1 {
        return Err(RuleError::MultipleDefaults(medicine.to_string()));
    }
    Ok(())
}

fn canonical_aliases(
    aliases: BTreeMap<String, String>,
    section: &'static str,
) -> RuleResult<BTreeMap<String, String>> {
    aliases
        .into_iter()
        .map(|(alias, canonical)| {
            Ok((
                non_empty_key(&alias, section)?,
                non_empty_key(&canonical, section)?,
            ))
        })
        .collect()
}

/// Aliases are expanded before lookup, so an alias may not reuse a real key.
/// Targets missing from the table are kept but logged.
fn check_aliases<V>(
    aliases: &BTreeMap<String, String>,
    keys: &BTreeMap<String, V>,
    section: &'static str,
) -> RuleResult<()> {
    for (alias, canonical) in aliases {
        if keys.contains_key(alias) {
            return Err(RuleError::AliasShadowsKey {
                section,
                alias: alias.clone(),
            });
        }
        if !keys.contains_key(canonical) {
            tracing::warn!(section, alias = %alias, target = %canonical, "Alias target not in rule table");
        }
    }
    Ok(())
}
