//! Drug interaction check models.

use serde::{Deserialize, Serialize};

/// Overall outcome of an interaction check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionStatus {
    /// No interacting pair was identified
    NoneFound,
    /// At least one interacting pair was identified
    Warning,
}

/// Severity of an interacting pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum InteractionSeverity {
    /// Usually safe together; worth noting
    Minor,
    /// Monitor or adjust dosing
    Moderate,
    /// Avoid the combination
    Major,
}

/// A flagged pair of medicines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionPair {
    /// First medicine of the pair, display casing
    pub medicine_a: String,
    /// Second medicine of the pair, display casing
    pub medicine_b: String,
    /// How serious the interaction is
    pub severity: InteractionSeverity,
}

/// Result of checking a list of medicines for interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionResult {
    /// Overall outcome
    pub status: InteractionStatus,
    /// Human-readable summary
    pub message: String,
    /// Flagged pairs, empty when nothing interacts
    pub pairs: Vec<InteractionPair>,
}

impl InteractionResult {
    /// Message reported when nothing interacts.
    ///
    /// Wording follows the original service's response text, capitalized
    /// with a trailing period.
    pub const NONE_FOUND_MESSAGE: &'static str = "No interactions found for given medicines.";

    /// Result with no flagged pairs.
    pub fn none_found() -> Self {
        Self {
            status: InteractionStatus::NoneFound,
            message: Self::NONE_FOUND_MESSAGE.to_string(),
            pairs: Vec::new(),
        }
    }

    /// Result carrying flagged pairs. An empty list collapses to `none_found`.
    pub fn from_pairs(pairs: Vec<InteractionPair>) -> Self {
        if pairs.is_empty() {
            return Self::none_found();
        }
        Self {
            status: InteractionStatus::Warning,
            message: format!("{} potential interaction(s) found.", pairs.len()),
            pairs,
        }
    }

    /// Highest severity among flagged pairs.
    pub fn max_severity(&self) -> Option<InteractionSeverity> {
        self.pairs.iter().map(|p| p.severity).max()
    }
}
