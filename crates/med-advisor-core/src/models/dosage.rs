//! Age-tiered dosage policy models.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One age-bounded dosage rule within a medicine's policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DosageTier {
    /// Tier applies when `age < max_age_exclusive`. `None` marks the default tier.
    #[serde(default)]
    pub max_age_exclusive: Option<i64>,
    /// Dose text for this tier
    pub dose: String,
}

impl DosageTier {
    /// Create a tier bounded by an exclusive age threshold.
    pub fn under(max_age_exclusive: i64, dose: impl Into<String>) -> Self {
        Self {
            max_age_exclusive: Some(max_age_exclusive),
            dose: dose.into(),
        }
    }

    /// Create the unconditional default tier.
    pub fn default_tier(dose: impl Into<String>) -> Self {
        Self {
            max_age_exclusive: None,
            dose: dose.into(),
        }
    }

    /// Whether this is the default (unthresholded) tier.
    pub fn is_default(&self) -> bool {
        self.max_age_exclusive.is_none()
    }

    /// Check if a known age falls inside this tier's threshold.
    fn admits(&self, age: i64) -> bool {
        matches!(self.max_age_exclusive, Some(threshold) if age < threshold)
    }
}

/// Dosage rules for one medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DosagePolicy {
    /// Canonical medicine key
    pub medicine: String,
    /// Tiers ordered lowest threshold first, default last
    pub tiers: Vec<DosageTier>,
}

impl DosagePolicy {
    /// Create a policy, putting the tiers in evaluation order.
    pub fn new(medicine: impl Into<String>, tiers: Vec<DosageTier>) -> Self {
        let mut policy = Self {
            medicine: medicine.into(),
            tiers,
        };
        policy.sort_tiers();
        policy
    }

    /// Sort tiers ascending by threshold with the default tier last.
    pub fn sort_tiers(&mut self) {
        self.tiers
            .sort_by(|a, b| match (a.max_age_exclusive, b.max_age_exclusive) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
    }

    /// The default (adult) tier, if configured.
    pub fn default_tier(&self) -> Option<&DosageTier> {
        self.tiers.iter().find(|t| t.is_default())
    }

    /// Select the tier for a patient age.
    ///
    /// The first thresholded tier with `age < threshold` wins. A missing age,
    /// or an age at or above every threshold, selects the default tier.
    /// Returns `None` only when no tier matches and no default exists.
    pub fn select(&self, age: Option<i64>) -> Option<&DosageTier> {
        age.and_then(|a| self.tiers.iter().find(|t| t.admits(a)))
            .or_else(|| self.default_tier())
    }
}

/// Outcome of resolving one medicine's dosage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DosageResolution {
    /// Medicine name as the caller wrote it (trimmed)
    pub medicine: String,
    /// Selected dose text, or the templated fallback
    pub dosage: String,
    /// Substitute medicine descriptors
    pub alternatives: Vec<String>,
    /// How the dose was chosen
    pub source: DosageSource,
}

/// Where a resolved dose came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DosageSource {
    /// A thresholded tier matched the patient age
    AgeTier,
    /// The policy's default tier was used
    DefaultTier,
    /// The medicine has a policy but no tier applied (configuration gap)
    PolicyGap,
    /// The medicine is not in the curated table
    Uncurated,
}

impl DosageSource {
    /// Whether the dose text is the generic templated fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, DosageSource::PolicyGap | DosageSource::Uncurated)
    }
}
