//! Prescription upload endpoint.

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use rxverify_common::{ApiError, VerifiedMedicine};
use rxverify_llm::ExtractionResult;

use crate::state::SharedState;

/// MIME type assumed when the upload does not declare one.
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub medicines: Vec<VerifiedMedicine>,
}

/// POST /api/extract_medicines — upload one prescription image, get back the
/// extracted medicines annotated with their verification status.
///
/// AI and parsing failures never fail the request: they come back as a single
/// unverified entry in the normal 200 payload.
pub async fn extract_medicines(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let (image, mime_type) = read_upload(&mut multipart).await?;

    let medicines = match state.extractor.extract(&image, &mime_type).await {
        ExtractionResult::ParsedList(records) => state.verifier.verify(records, &state.dataset),
        // Pre-tagged failures bypass the matcher entirely.
        ExtractionResult::Fallback(record) => vec![VerifiedMedicine::not_verified(record)],
    };

    Ok(Json(ExtractResponse { medicines }))
}

/// Pull the uploaded file field out of the multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<(Vec<u8>, String), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(format!("Invalid multipart body: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let mime_type = field.content_type().unwrap_or(FALLBACK_MIME).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApiError::bad_request(format!("Failed to read upload: {err}")))?;

        return Ok((bytes.to_vec(), mime_type));
    }

    Err(ApiError::bad_request("Missing 'file' upload field"))
}
