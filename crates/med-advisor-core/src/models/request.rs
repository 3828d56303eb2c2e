//! Per-call request and response payloads.

use serde::{Deserialize, Serialize};

use super::{AdvisoryRecord, InteractionResult};

/// Transient symptom analysis request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionRequest {
    /// Comma-separated free text
    pub raw_text: String,
    /// Patient age in years
    pub age: Option<i64>,
    /// Patient weight in kg
    pub weight: Option<f64>,
}

impl ResolutionRequest {
    /// Create a request with no patient details.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            age: None,
            weight: None,
        }
    }

    /// Set the patient age.
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the patient weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Response to a symptom analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    /// At least one symptom matched
    Recommendations {
        age: Option<i64>,
        weight: Option<f64>,
        recommendations: Vec<AdvisoryRecord>,
    },
    /// Nothing matched; message only
    NoAdvice { message: String },
}

impl AnalyzeResponse {
    /// Message returned when no symptom matched.
    pub const NO_ADVICE_MESSAGE: &'static str = "No medicine advice found for the symptoms.";

    /// The "nothing matched" response.
    pub fn no_advice() -> Self {
        AnalyzeResponse::NoAdvice {
            message: Self::NO_ADVICE_MESSAGE.to_string(),
        }
    }

    /// Matched records, empty for `NoAdvice`.
    pub fn recommendations(&self) -> &[AdvisoryRecord] {
        match self {
            AnalyzeResponse::Recommendations {
                recommendations, ..
            } => recommendations,
            AnalyzeResponse::NoAdvice { .. } => &[],
        }
    }
}

/// Response to an interaction check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionResponse {
    /// Medicine names as entered (trimmed)
    pub medicines: Vec<String>,
    pub interactions: InteractionResult,
}

/// Per-medicine dosage row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DosageInfo {
    pub medicine: String,
    pub dosage: String,
    pub alternatives: Vec<String>,
}

/// Response to a dosage-and-alternatives lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DosageResponse {
    /// One entry per input name, in input order
    pub dosage_info: Vec<DosageInfo>,
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub hello: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            hello: "world".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_advice_serializes_message_only() {
        let json = serde_json::to_value(AnalyzeResponse::no_advice()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "No medicine advice found for the symptoms." })
        );
    }

    #[test]
    fn test_recommendations_shape() {
        let response = AnalyzeResponse::Recommendations {
            age: Some(30),
            weight: Some(70.5),
            recommendations: vec![AdvisoryRecord::new("fever", "Paracetamol", "500 mg")],
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["age"], 30);
        assert_eq!(json["weight"], 70.5);
        assert_eq!(json["recommendations"][0]["medicine"], "Paracetamol");
        assert_eq!(response.recommendations().len(), 1);
    }

    #[test]
    fn test_request_builder() {
        let request = ResolutionRequest::new("fever").with_age(8).with_weight(25.0);
        assert_eq!(request.age, Some(8));
        assert_eq!(request.weight, Some(25.0));
    }

    #[test]
    fn test_health_payload() {
        let json = serde_json::to_string(&HealthResponse::default()).unwrap();
        assert_eq!(json, r#"{"hello":"world"}"#);
    }
}
