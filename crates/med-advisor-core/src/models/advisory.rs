//! Symptom advisory records.

use serde::{Deserialize, Serialize};

/// A single row of the symptom rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisoryRecord {
    /// Canonical symptom key (trimmed, lower-case)
    pub symptom: String,
    /// Recommended medicine, display casing
    pub medicine: String,
    /// Dosage instructions for the recommended medicine
    pub dosage: String,
}

impl AdvisoryRecord {
    /// Create a new advisory record.
    pub fn new(
        symptom: impl Into<String>,
        medicine: impl Into<String>,
        dosage: impl Into<String>,
    ) -> Self {
        Self {
            symptom: symptom.into(),
            medicine: medicine.into(),
            dosage: dosage.into(),
        }
    }
}
