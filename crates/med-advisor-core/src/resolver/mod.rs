//! Resolution engine for advisory requests.
//!
//! Pipeline: Free text → Normalization → {Symptom | Dosage | Interaction} resolution

mod dosage;
mod interactions;
mod normalizer;
mod symptoms;

pub use dosage::*;
pub use interactions::*;
pub use normalizer::*;
pub use symptoms::*;

use std::sync::Arc;

use crate::models::{
    AnalyzeResponse, DosageInfo, DosageResponse, HealthResponse, InteractionResponse,
    ResolutionRequest,
};
use crate::rules::RuleSet;

/// Coordinates the resolvers over one shared rule set.
///
/// Holds no mutable state, so a single instance can serve any number of
/// threads.
pub struct Advisor {
    rules: Arc<RuleSet>,
    interactions: Box<dyn InteractionChecker>,
    alternatives: Box<dyn AlternativesProvider>,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Advisor {
    /// Create an advisor with the stub interaction checker and placeholder alternatives.
    pub fn new(rules: impl Into<Arc<RuleSet>>) -> Self {
        Self {
            rules: rules.into(),
            interactions: Box::new(NoInteractionChecker),
            alternatives: Box::new(PlaceholderAlternatives),
        }
    }

    /// Replace the interaction checker.
    pub fn with_interaction_checker(mut self, checker: impl InteractionChecker + 'static) -> Self {
        self.interactions = Box::new(checker);
        self
    }

    /// Replace the alternatives provider.
    pub fn with_alternatives(mut self, provider: impl AlternativesProvider + 'static) -> Self {
        self.alternatives = Box::new(provider);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.rules)
    }

    pub fn symptom_resolver(&self) -> SymptomResolver<'_> {
        SymptomResolver::new(&self.rules)
    }

    pub fn dosage_resolver(&self) -> DosageResolver<'_> {
        DosageResolver::new(&self.rules, self.alternatives.as_ref())
    }

    /// Map symptom text to advisory records.
    pub fn analyze(&self, request: &ResolutionRequest) -> AnalyzeResponse {
        let tokens = self.normalizer().normalize(&request.raw_text);
        let recommendations = self.symptom_resolver().resolve(&tokens);

        tracing::debug!(
            tokens = tokens.len(),
            matched = recommendations.len(),
            "Analyzed symptoms"
        );

        if recommendations.is_empty() {
            return AnalyzeResponse::no_advice();
        }

        AnalyzeResponse::Recommendations {
            age: request.age,
            weight: request.weight,
            recommendations,
        }
    }

    /// Check comma-separated medicine names for interactions.
    pub fn check_interactions(&self, text: &str) -> InteractionResponse {
        let medicines = self.normalizer().split_names(text);
        let interactions = self.interactions.check_interactions(&medicines);
        tracing::debug!(
            medicines = medicines.len(),
            pairs = interactions.pairs.len(),
            max_severity = ?interactions.max_severity(),
            "Checked interactions"
        );
        InteractionResponse {
            medicines,
            interactions,
        }
    }

    /// Resolve dosage and alternatives for comma-separated medicine names.
    pub fn check_dosage_alternatives(&self, text: &str, age: Option<i64>) -> DosageResponse {
        let names = self.normalizer().split_names(text);
        let dosage_info = self
            .dosage_resolver()
            .resolve_all(&names, age)
            .into_iter()
            .map(|r| DosageInfo {
                medicine: r.medicine,
                dosage: r.dosage,
                alternatives: r.alternatives,
            })
            .collect();

        DosageResponse { dosage_info }
    }

    /// Closest known symptom for one free-text segment.
    pub fn suggest_symptom(&self, text: &str) -> Option<String> {
        let key = self.normalizer().symptom_key(text);
        self.symptom_resolver().suggest(&key)
    }

    /// Liveness probe.
    pub fn health_check(&self) -> HealthResponse {
        HealthResponse::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InteractionPair, InteractionResult, InteractionSeverity, InteractionStatus};

    #[test]
    fn test_analyze_matches() {
        let advisor = Advisor::default();
        let request = ResolutionRequest::new("fever, headache").with_age(30).with_weight(70.0);

        let response = advisor.analyze(&request);

        match response {
            AnalyzeResponse::Recommendations {
                age,
                weight,
                recommendations,
            } => {
                assert_eq!(age, Some(30));
                assert_eq!(weight, Some(70.0));
                assert_eq!(recommendations.len(), 2);
                assert_eq!(recommendations[0].medicine, "Paracetamol");
                assert_eq!(recommendations[1].medicine, "Ibuprofen");
            }
            AnalyzeResponse::NoAdvice { .. } => panic!("expected recommendations"),
        }
    }

    #[test]
    fn test_analyze_no_match() {
        let advisor = Advisor::default();
        let response = advisor.analyze(&ResolutionRequest::new("unknown_symptom"));
        assert_eq!(response, AnalyzeResponse::no_advice());

        let response = advisor.analyze(&ResolutionRequest::new(" , ,"));
        assert_eq!(response, AnalyzeResponse::no_advice());
    }

    #[test]
    fn test_check_interactions_echoes_names() {
        let advisor = Advisor::default();
        let response = advisor.check_interactions(" Paracetamol, Ibuprofen ,");

        assert_eq!(response.medicines, vec!["Paracetamol", "Ibuprofen"]);
        assert_eq!(response.interactions.status, InteractionStatus::NoneFound);
    }

    #[test]
    fn test_custom_interaction_checker() {
        struct AlwaysFlag;
        impl InteractionChecker for AlwaysFlag {
            fn check_interactions(&self, medicines: &[String]) -> InteractionResult {
                let pairs = medicines
                    .windows(2)
                    .map(|w| InteractionPair {
                        medicine_a: w[0].clone(),
                        medicine_b: w[1].clone(),
                        severity: InteractionSeverity::Minor,
                    })
                    .collect();
                InteractionResult::from_pairs(pairs)
            }
        }

        let advisor = Advisor::default().with_interaction_checker(AlwaysFlag);
        let response = advisor.check_interactions("A, B");

        assert_eq!(response.interactions.status, InteractionStatus::Warning);
        assert_eq!(response.interactions.pairs.len(), 1);
    }

    #[test]
    fn test_dosage_alternatives_in_order() {
        let advisor = Advisor::default();
        let response = advisor.check_dosage_alternatives("Paracetamol, Aspirin, Paracetamol", Some(8));

        let names: Vec<_> = response.dosage_info.iter().map(|d| d.medicine.as_str()).collect();
        assert_eq!(names, vec!["Paracetamol", "Aspirin", "Paracetamol"]);
        assert_eq!(response.dosage_info[0].dosage, "250 mg every 6 hours (max 1g/day)");
        assert_eq!(response.dosage_info[1].dosage, "Standard dosage for Aspirin");
    }

    #[test]
    fn test_suggest_symptom() {
        let advisor = Advisor::default();
        assert_eq!(advisor.suggest_symptom(" Headach "), Some("headache".to_string()));
        assert_eq!(advisor.suggest_symptom("pyrexia"), Some("fever".to_string()));
    }

    #[test]
    fn test_health_check() {
        assert_eq!(Advisor::default().health_check().hello, "world");
    }
}
