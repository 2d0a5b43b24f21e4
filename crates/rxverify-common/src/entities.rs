/// Core domain types for prescription verification.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Extracted medicine record
// ---------------------------------------------------------------------------

/// A single medicine as extracted by the vision model.
/// `name` can be empty or noisy text when extraction was unreliable; fields
/// absent from the model reply deserialize to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicineRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dosage: String,
}

// ---------------------------------------------------------------------------
// Verification status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    #[serde(rename = "Not Verified")]
    NotVerified,
}

impl VerificationStatus {
    /// Label used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified    => "Verified",
            VerificationStatus::NotVerified => "Not Verified",
        }
    }
}

// ---------------------------------------------------------------------------
// Verified medicine
// ---------------------------------------------------------------------------

/// Output unit: one extracted record annotated with its verification status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifiedMedicine {
    pub name: String,
    pub dosage: String,
    pub status: VerificationStatus,
}

impl VerifiedMedicine {
    /// Annotate a record as unverified without matching it against the
    /// reference list. Used for synthetic fallback records.
    pub fn not_verified(record: MedicineRecord) -> Self {
        Self {
            name: record.name,
            dosage: record.dosage,
            status: VerificationStatus::NotVerified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_wire_labels() {
        assert_eq!(
            serde_json::to_string(&VerificationStatus::Verified).unwrap(),
            "\"Verified\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationStatus::NotVerified).unwrap(),
            "\"Not Verified\""
        );
    }

    #[test]
    fn record_tolerates_missing_fields() {
        let record: MedicineRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.dosage, "");
    }

    #[test]
    fn not_verified_keeps_record_fields() {
        let out = VerifiedMedicine::not_verified(MedicineRecord {
            name: "Error contacting Gemini".to_string(),
            dosage: String::new(),
        });
        assert_eq!(out.status, VerificationStatus::NotVerified);
        assert_eq!(out.name, "Error contacting Gemini");
        assert_eq!(out.dosage, "");
    }
}
