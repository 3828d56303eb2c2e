//! Age-tiered dosage resolution with alternatives.
//!
//! Lookup order:
//! 1. Curated policy tier for the patient age (strict `age < threshold`)
//! 2. The policy's default tier when no threshold applies
//! 3. A templated fallback dose when the medicine is uncurated or the
//!    policy has no applicable tier

use crate::models::{DosageResolution, DosageSource};
use crate::rules::RuleSet;

use super::Normalizer;

/// Generic dose text for medicines outside the curated table.
pub fn fallback_dose(medicine: &str) -> String {
    format!("Standard dosage for {}", medicine)
}

/// Source of substitute-medicine descriptors.
///
/// Implementations must be deterministic: the same input yields the same list.
pub trait AlternativesProvider: Send + Sync {
    /// Up to `count` alternatives for a medicine (display name).
    fn alternatives(&self, medicine: &str, count: usize) -> Vec<String>;
}

/// Numbered placeholder descriptors referencing the medicine name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAlternatives;

impl AlternativesProvider for PlaceholderAlternatives {
    fn alternatives(&self, medicine: &str, count: usize) -> Vec<String> {
        (1..=count)
            .map(|n| format!("Alternative {} for {}", n, medicine))
            .collect()
    }
}

/// Resolves dosage text for medicine names.
pub struct DosageResolver<'a> {
    rules: &'a RuleSet,
    normalizer: Normalizer<'a>,
    alternatives: &'a dyn AlternativesProvider,
}

impl<'a> DosageResolver<'a> {
    /// Create a new dosage resolver.
    pub fn new(rules: &'a RuleSet, alternatives: &'a dyn AlternativesProvider) -> Self {
        Self {
            rules,
            normalizer: Normalizer::new(rules),
            alternatives,
        }
    }

    /// Resolve the dose and alternatives for one medicine.
    pub fn resolve(&self, medicine_name: &str, age: Option<i64>) -> DosageResolution {
        let display = medicine_name.trim();
        let key = self.normalizer.medicine_key(display);

        let (dosage, source) = match self.rules.policy(&key) {
            Some(policy) => match policy.select(age) {
                Some(tier) if tier.is_default() => (tier.dose.clone(), DosageSource::DefaultTier),
                Some(tier) => (tier.dose.clone(), DosageSource::AgeTier),
                None => (fallback_dose(display), DosageSource::PolicyGap),
            },
            None => (fallback_dose(display), DosageSource::Uncurated),
        };

        if source.is_fallback() {
            if source == DosageSource::PolicyGap {
                tracing::warn!(medicine = %key, age = ?age, "Dosage policy has no applicable tier, using fallback");
            } else {
                tracing::debug!(medicine = %key, "No curated dosage policy, using fallback");
            }
        }

        DosageResolution {
            medicine: display.to_string(),
            dosage,
            alternatives: self
                .alternatives
                .alternatives(display, self.rules.settings().alternatives_per_medicine),
            source,
        }
    }

    /// Resolve each name independently, in input order.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S], age: Option<i64>) -> Vec<DosageResolution> {
        names.iter().map(|n| self.resolve(n.as_ref(), age)).collect()
    }
}
