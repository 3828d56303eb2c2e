//! Free-text normalizer.
//!
//! Handles:
//! - Comma splitting with whitespace trimming
//! - Dropping empty segments (stray or trailing commas)
//! - Canonical keys (trim + lower-case) with alias expansion

use crate::rules::RuleSet;

/// Trim and lower-case a name into its canonical lookup form.
pub fn canonicalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split comma-separated text into trimmed, non-empty segments.
///
/// Casing is preserved for display.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Normalizer for symptom and medicine input.
pub struct Normalizer<'a> {
    rules: &'a RuleSet,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer over a rule set's alias tables.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Normalize comma-separated symptom text into canonical symptom keys.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        split_list(text)
            .iter()
            .map(|s| self.symptom_key(s))
            .collect()
    }

    /// Split comma-separated medicine text, keeping the caller's casing.
    pub fn split_names(&self, text: &str) -> Vec<String> {
        split_list(text)
    }

    /// Canonical symptom key for one segment.
    pub fn symptom_key(&self, raw: &str) -> String {
        let lower = canonicalize(raw);
        match self.rules.symptom_alias(&lower) {
            Some(canonical) => canonical.to_string(),
            None => lower,
        }
    }

    /// Canonical medicine key for one name.
    pub fn medicine_key(&self, raw: &str) -> String {
        let lower = canonicalize(raw);
        match self.rules.medicine_alias(&lower) {
            Some(canonical) => canonical.to_string(),
            None => lower,
        }
    }
}
