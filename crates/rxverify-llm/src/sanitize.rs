//! Cleanup of model replies before JSON parsing.
//!
//! The model is instructed to answer with bare JSON, but replies routinely
//! arrive wrapped in markdown code fences anyway. Stripping is literal text
//! replacement; the fence markers are the only cleanup this service commits
//! to, since the reply format carries no contractual guarantee.

/// Remove ``` and ```json fence markers and trim surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
