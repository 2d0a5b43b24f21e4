//! rxverify-llm — Vision-model client for prescription extraction.
//!
//! Backends:
//!   GeminiBackend — Google Gemini API (gemini-1.5-flash, gemini-1.5-pro, …)
//!
//! The extractor wraps a backend with the fixed extraction prompt, sanitizes
//! the reply, and validates it into a tagged [`ExtractionResult`]. Every
//! failure mode collapses into a fallback record — callers never see an error.

pub mod backend;
pub mod extractor;
pub mod sanitize;

pub use backend::{GeminiBackend, LlmError, VisionBackend};
pub use extractor::{ExtractionResult, MedicineExtractor, EXTRACTION_FAILURE_NAME};
