//! Med-Advisor Core Library
//!
//! Deterministic, rule-based resolution engine for clinical-advisory requests.
//!
//! # Architecture
//!
//! ```text
//!                        Free text ("fever, headache")
//!                                     │
//!                                 Normalizer
//!                     (split, trim, lower-case, aliases)
//!                                     │
//!             ┌───────────────────────┼───────────────────────┐
//!             │                       │                       │
//!             ▼                       ▼                       ▼
//!      Symptom Resolver        Dosage Resolver      Interaction Checker
//!      (rule table)            (age tiers +         (stub contract)
//!                               alternatives)
//!             │                       │                       │
//!             └───────────────────────┼───────────────────────┘
//!                                     ▼
//!                             Structured result
//! ```
//!
//! # Core Principle
//!
//! **Every input has a defined output.** Unmatched symptoms are skipped,
//! uncurated medicines get a templated fallback dose, and nothing inside the
//! engine raises. Advice produced here is not a guarantee of medical correctness.
//!
//! # Modules
//!
//! - [`models`]: Domain types (AdvisoryRecord, DosagePolicy, InteractionResult, etc.)
//! - [`rules`]: Immutable rule table and dosage policy configuration
//! - [`resolver`]: Normalizer, symptom/dosage resolvers, interaction checker, [`Advisor`]

pub mod models;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use models::{
    AdvisoryRecord, AnalyzeResponse, DosagePolicy, DosageResolution, DosageSource, DosageTier,
    InteractionResult, InteractionStatus, ResolutionRequest,
};
pub use resolver::{Advisor, DosageResolver, Normalizer, SymptomResolver};
pub use rules::{AdvisorSettings, RuleSet};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum AdvisorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<rules::RuleError> for AdvisorError {
    fn from(e: rules::RuleError) -> Self {
        match e {
            rules::RuleError::Io(e) => AdvisorError::IoError(e.to_string()),
            rules::RuleError::Json(e) => AdvisorError::SerializationError(e.to_string()),
            other => AdvisorError::InvalidConfig(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AdvisorError {
    fn from(e: serde_json::Error) -> Self {
        AdvisorError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an advisor over the built-in rule table.
#[uniffi::export]
pub fn open_default_advisor() -> Arc<MedAdvisorCore> {
    Arc::new(MedAdvisorCore {
        advisor: Advisor::default(),
    })
}

/// Create an advisor from a JSON rule document.
#[uniffi::export]
pub fn open_advisor_from_json(json: String) -> Result<Arc<MedAdvisorCore>, AdvisorError> {
    let rules = RuleSet::from_json(&json)?;
    Ok(Arc::new(MedAdvisorCore {
        advisor: Advisor::new(rules),
    }))
}

/// Create an advisor from a JSON rule file on disk.
#[uniffi::export]
pub fn open_advisor_from_file(path: String) -> Result<Arc<MedAdvisorCore>, AdvisorError> {
    let rules = RuleSet::from_json_file(&path)?;
    Ok(Arc::new(MedAdvisorCore {
        advisor: Advisor::new(rules),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe advisor handle for FFI.
///
/// The rule set is read-only after construction, so no lock is needed.
#[derive(uniffi::Object)]
pub struct MedAdvisorCore {
    advisor: Advisor,
}

#[uniffi::export]
impl MedAdvisorCore {
    // =========================================================================
    // Symptom Operations
    // =========================================================================

    /// Map comma-separated symptoms to recommendations.
    pub fn analyze(&self, text: String, age: Option<i64>, weight: Option<f64>) -> FfiAnalyzeResult {
        self.advisor.analyze(&request(text, age, weight)).into()
    }

    /// Analyze and return the response payload as JSON.
    pub fn analyze_json(
        &self,
        text: String,
        age: Option<i64>,
        weight: Option<f64>,
    ) -> Result<String, AdvisorError> {
        let response = self.advisor.analyze(&request(text, age, weight));
        Ok(serde_json::to_string(&response)?)
    }

    /// Closest known symptom for a misspelled entry.
    pub fn suggest_symptom(&self, text: String) -> Option<String> {
        self.advisor.suggest_symptom(&text)
    }

    // =========================================================================
    // Medicine Operations
    // =========================================================================

    /// Check comma-separated medicines for interactions.
    pub fn check_interactions(&self, text: String) -> FfiInteractionResult {
        self.advisor.check_interactions(&text).into()
    }

    /// Check interactions and return the response payload as JSON.
    pub fn check_interactions_json(&self, text: String) -> Result<String, AdvisorError> {
        Ok(serde_json::to_string(&self.advisor.check_interactions(&text))?)
    }

    /// Dosage and alternatives for comma-separated medicines.
    pub fn check_dosage_alternatives(&self, text: String, age: Option<i64>) -> Vec<FfiDosageInfo> {
        self.advisor
            .check_dosage_alternatives(&text, age)
            .dosage_info
            .into_iter()
            .map(|d| d.into())
            .collect()
    }

    /// Dosage lookup returning the response payload as JSON.
    pub fn check_dosage_alternatives_json(
        &self,
        text: String,
        age: Option<i64>,
    ) -> Result<String, AdvisorError> {
        Ok(serde_json::to_string(
            &self.advisor.check_dosage_alternatives(&text, age),
        )?)
    }

    // =========================================================================
    // Service Operations
    // =========================================================================

    /// Liveness probe payload as JSON.
    pub fn health_check_json(&self) -> Result<String, AdvisorError> {
        Ok(serde_json::to_string(&self.advisor.health_check())?)
    }

    /// Export the active rule set as JSON.
    pub fn export_rules_json(&self) -> Result<String, AdvisorError> {
        Ok(self.advisor.rules().to_json()?)
    }
}

fn request(text: String, age: Option<i64>, weight: Option<f64>) -> ResolutionRequest {
    ResolutionRequest {
        raw_text: text,
        age,
        weight,
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe advisory record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdvisoryRecord {
    pub symptom: String,
    pub medicine: String,
    pub dosage: String,
}

impl From<AdvisoryRecord> for FfiAdvisoryRecord {
    fn from(record: AdvisoryRecord) -> Self {
        Self {
            symptom: record.symptom,
            medicine: record.medicine,
            dosage: record.dosage,
        }
    }
}

/// FFI-safe analysis result. `message` is set only when nothing matched.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAnalyzeResult {
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub recommendations: Vec<FfiAdvisoryRecord>,
    pub message: Option<String>,
}

impl From<AnalyzeResponse> for FfiAnalyzeResult {
    fn from(response: AnalyzeResponse) -> Self {
        match response {
            AnalyzeResponse::Recommendations {
                age,
                weight,
                recommendations,
            } => Self {
                age,
                weight,
                recommendations: recommendations.into_iter().map(|r| r.into()).collect(),
                message: None,
            },
            AnalyzeResponse::NoAdvice { message } => Self {
                age: None,
                weight: None,
                recommendations: Vec::new(),
                message: Some(message),
            },
        }
    }
}

/// FFI-safe interaction status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiInteractionStatus {
    NoneFound,
    Warning,
}

impl From<InteractionStatus> for FfiInteractionStatus {
    fn from(status: InteractionStatus) -> Self {
        match status {
            InteractionStatus::NoneFound => FfiInteractionStatus::NoneFound,
            InteractionStatus::Warning => FfiInteractionStatus::Warning,
        }
    }
}

/// FFI-safe interacting pair.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInteractionPair {
    pub medicine_a: String,
    pub medicine_b: String,
    pub severity: String,
}

/// FFI-safe interaction check result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInteractionResult {
    pub medicines: Vec<String>,
    pub status: FfiInteractionStatus,
    pub message: String,
    pub pairs: Vec<FfiInteractionPair>,
}

impl From<models::InteractionResponse> for FfiInteractionResult {
    fn from(response: models::InteractionResponse) -> Self {
        let result = response.interactions;
        Self {
            medicines: response.medicines,
            status: result.status.into(),
            message: result.message,
            pairs: result
                .pairs
                .into_iter()
                .map(|p| FfiInteractionPair {
                    medicine_a: p.medicine_a,
                    medicine_b: p.medicine_b,
                    severity: format!("{:?}", p.severity),
                })
                .collect(),
        }
    }
}

/// FFI-safe dosage row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDosageInfo {
    pub medicine: String,
    pub dosage: String,
    pub alternatives: Vec<String>,
}

impl From<models::DosageInfo> for FfiDosageInfo {
    fn from(info: models::DosageInfo) -> Self {
        Self {
            medicine: info.medicine,
            dosage: info.dosage,
            alternatives: info.alternatives,
        }
    }
}
