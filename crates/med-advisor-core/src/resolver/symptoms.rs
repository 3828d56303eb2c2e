//! Symptom → advisory lookup.

use strsim::jaro_winkler;

use crate::models::AdvisoryRecord;
use crate::rules::RuleSet;

/// Resolves canonical symptom tokens against the rule table.
pub struct SymptomResolver<'a> {
    rules: &'a RuleSet,
}

impl<'a> SymptomResolver<'a> {
    /// Create a new symptom resolver.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Emit the advisory record of every matched token, in input order.
    ///
    /// Unmatched tokens are skipped. Duplicates are kept.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<AdvisoryRecord> {
        tokens
            .iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let record = self.rules.symptom(token);
                if record.is_none() {
                    tracing::debug!(
                        symptom = token,
                        suggestion = ?self.suggest(token),
                        "Skipping unmatched symptom"
                    );
                }
                record.cloned()
            })
            .collect()
    }

    /// Closest known symptom key, if similar enough.
    pub fn suggest(&self, token: &str) -> Option<String> {
        if self.rules.symptom(token).is_some() {
            return Some(token.to_string());
        }

        let threshold = self.rules.settings().suggestion_threshold;
        self.rules
            .symptom_keys()
            .map(|key| (key, jaro_winkler(token, key)))
            .filter(|(_, score)| *score >= threshold)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(key, _)| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_order() {
        let rules = RuleSet::builtin();
        let resolver = SymptomResolver::new(&rules);

        let records = resolver.resolve(&["fever", "headache"]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symptom, "fever");
        assert_eq!(records[0].medicine, "Paracetamol");
        assert_eq!(records[1].symptom, "headache");
        assert_eq!(records[1].medicine, "Ibuprofen");
    }

    #[test]
    fn test_unmatched_skipped() {
        let rules = RuleSet::builtin();
        let resolver = SymptomResolver::new(&rules);

        assert!(resolver.resolve(&["unknown_symptom"]).is_empty());

        let records = resolver.resolve(&["rash", "cold"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].medicine, "Cetirizine");
    }

    #[test]
    fn test_duplicates_kept() {
        let rules = RuleSet::builtin();
        let resolver = SymptomResolver::new(&rules);

        let records = resolver.resolve(&["cough", "cough"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_suggest_close_spelling() {
        let rules = RuleSet::builtin();
        let resolver = SymptomResolver::new(&rules);

        assert_eq!(resolver.suggest("headach"), Some("headache".to_string()));
        assert_eq!(resolver.suggest("fevr"), Some("fever".to_string()));
        assert_eq!(resolver.suggest("fever"), Some("fever".to_string()));
        assert_eq!(resolver.suggest("broken leg"), None);
    }
}
