//! Prescription extraction: prompt, reply validation, fallback shaping.

use std::sync::Arc;

use rxverify_common::MedicineRecord;
use tracing::{debug, error, warn};

use crate::backend::VisionBackend;
use crate::sanitize::strip_code_fences;

/// Instruction sent with every prescription image.
const EXTRACTION_PROMPT: &str = r#"Extract ONLY medicine names and their dosage from this prescription.
Output strictly as JSON array of objects like:
[{"name": "Augmentin 625 Duo Tablet", "dosage": "1 tab twice daily"}]
If dosage not available, set dosage as "" (empty string). No extra text, no markdown."#;

/// Placeholder name reported when the backend call itself fails.
pub const EXTRACTION_FAILURE_NAME: &str = "Error contacting Gemini";

/// Outcome of one extraction attempt, validated at this boundary.
///
/// `ParsedList` carries records for the verifier to check. `Fallback` carries
/// a single synthetic record that is already known to be unverified and must
/// bypass matching.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    ParsedList(Vec<MedicineRecord>),
    Fallback(MedicineRecord),
}

/// Extracts medicine records from prescription images via a vision backend.
pub struct MedicineExtractor {
    backend: Arc<dyn VisionBackend>,
}

impl MedicineExtractor {
    pub fn new(backend: Arc<dyn VisionBackend>) -> Self {
        Self { backend }
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    /// Run one extraction. Never fails: every backend or parse problem
    /// collapses into a `Fallback` record.
    pub async fn extract(&self, image: &[u8], mime_type: &str) -> ExtractionResult {
        let raw = match self
            .backend
            .describe_image(EXTRACTION_PROMPT, image, mime_type)
            .await
        {
            Ok(text) => text,
            Err(err) => {
                error!(model = self.backend.model_id(), %err, "Vision backend call failed");
                return ExtractionResult::Fallback(MedicineRecord {
                    name: EXTRACTION_FAILURE_NAME.to_string(),
                    dosage: String::new(),
                });
            }
        };

        let raw = raw.trim();
        debug!(model = self.backend.model_id(), reply = raw, "Raw model output");

        parse_extraction(raw)
    }
}

/// Validate a raw model reply into the tagged result. Anything that is not a
/// JSON list of records keeps the raw text as a single unverified entry.
fn parse_extraction(raw: &str) -> ExtractionResult {
    let cleaned = strip_code_fences(raw);

    let fallback = || {
        ExtractionResult::Fallback(MedicineRecord {
            name: raw.to_string(),
            dosage: String::new(),
        })
    };

    let value: serde_json::Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, "Model reply is not valid JSON");
            return fallback();
        }
    };

    if !value.is_array() {
        warn!("Model reply is valid JSON but not a list");
        return fallback();
    }

    match serde_json::from_value::<Vec<MedicineRecord>>(value) {
        Ok(records) => ExtractionResult::ParsedList(records),
        Err(err) => {
            warn!(%err, "Model reply list has an unexpected element shape");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::backend::LlmError;

    struct CannedBackend {
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl VisionBackend for CannedBackend {
        async fn describe_image(
            &self,
            _prompt: &str,
            _image: &[u8],
            _mime_type: &str,
        ) -> Result<String, LlmError> {
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(LlmError::ApiError {
                    status: 503,
                    message: "backend down".to_string(),
                }),
            }
        }

        fn model_id(&self) -> &str {
            "canned-vision"
        }
    }

    fn extractor(reply: Option<&'static str>) -> MedicineExtractor {
        MedicineExtractor::new(Arc::new(CannedBackend { reply }))
    }

    #[tokio::test]
    async fn parses_a_fenced_json_list() {
        let ex = extractor(Some(
            "```json\n[{\"name\": \"Augmentin 625 Duo Tablet\", \"dosage\": \"1 tab twice daily\"}]\n```",
        ));
        match ex.extract(b"img", "image/png").await {
            ExtractionResult::ParsedList(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].name, "Augmentin 625 Duo Tablet");
                assert_eq!(records[0].dosage, "1 tab twice daily");
            }
            other => panic!("expected parsed list, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn backend_failure_becomes_fallback() {
        let ex = extractor(None);
        match ex.extract(b"img", "image/png").await {
            ExtractionResult::Fallback(record) => {
                assert_eq!(record.name, EXTRACTION_FAILURE_NAME);
                assert_eq!(record.dosage, "");
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn non_list_json_keeps_raw_text() {
        let raw = "{\"name\": \"Augmentin\"}";
        match parse_extraction(raw) {
            ExtractionResult::Fallback(record) => assert_eq!(record.name, raw),
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_reply_keeps_raw_text() {
        let raw = "no medicines found, sorry";
        match parse_extraction(raw) {
            ExtractionResult::Fallback(record) => {
                assert_eq!(record.name, raw);
                assert_eq!(record.dosage, "");
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn missing_dosage_defaults_to_empty() {
        match parse_extraction("[{\"name\": \"Dolo 650 Tablet\"}]") {
            ExtractionResult::ParsedList(records) => {
                assert_eq!(records[0].name, "Dolo 650 Tablet");
                assert_eq!(records[0].dosage, "");
            }
            other => panic!("expected parsed list, got {:?}", other),
        }
    }

    #[test]
    fn empty_list_stays_a_list() {
        assert_eq!(parse_extraction("[]"), ExtractionResult::ParsedList(vec![]));
    }
}
