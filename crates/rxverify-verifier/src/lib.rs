//! rxverify-verifier — Fuzzy verification of extracted medicine names.
//!
//! Each extracted record is matched against the reference dataset with a
//! weighted-ratio scorer; names at or above the similarity threshold are
//! marked `Verified`, everything else `NotVerified`. Output order always
//! mirrors input order.

pub mod score;

use rxverify_common::{MedicineRecord, VerificationStatus, VerifiedMedicine};
use rxverify_dataset::ReferenceDataset;
use tracing::debug;

use crate::score::best_match;

/// Minimum similarity (0–100) for a name to count as verified.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 80.0;

/// Checks extracted records against the reference dataset.
#[derive(Debug, Clone)]
pub struct Verifier {
    threshold: f64,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl Verifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Annotate every record with a verification status, preserving input
    /// order. Status is recomputed for each record handed in; callers decide
    /// which records reach this step.
    pub fn verify(
        &self,
        records: Vec<MedicineRecord>,
        dataset: &ReferenceDataset,
    ) -> Vec<VerifiedMedicine> {
        records
            .into_iter()
            .map(|record| self.verify_one(record, dataset))
            .collect()
    }

    fn verify_one(&self, record: MedicineRecord, dataset: &ReferenceDataset) -> VerifiedMedicine {
        let name = record.name.trim().to_string();
        let dosage = record.dosage.trim().to_string();

        let status = match best_match(&name, dataset.names()) {
            Some((idx, score)) if score >= self.threshold => {
                debug!(name = %name, matched = %dataset.names()[idx], score, "Name verified");
                VerificationStatus::Verified
            }
            Some((_, score)) => {
                debug!(name = %name, score, "No reference name above threshold");
                VerificationStatus::NotVerified
            }
            None => VerificationStatus::NotVerified,
        };

        VerifiedMedicine { name, dosage, status }
    }
}
