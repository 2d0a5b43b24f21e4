//! Shared application state for the web server.

use std::sync::Arc;

use rxverify_dataset::ReferenceDataset;
use rxverify_llm::MedicineExtractor;
use rxverify_verifier::Verifier;

/// Shared state injected into every Axum handler.
/// Built once at startup; read-only afterwards, so concurrent handlers can
/// share it without synchronization.
pub struct AppState {
    pub dataset: ReferenceDataset,
    pub extractor: MedicineExtractor,
    pub verifier: Verifier,
}

impl AppState {
    pub fn new(dataset: ReferenceDataset, extractor: MedicineExtractor, verifier: Verifier) -> Self {
        Self {
            dataset,
            extractor,
            verifier,
        }
    }
}

pub type SharedState = Arc<AppState>;
