//! rxverify-web — HTTP surface for prescription verification.
//!
//! One upload route pipes the image through the vision extractor and the
//! fuzzy verifier; a health route reports the loaded state.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
