use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{descriptor_for, PdfExportDescriptor};
use crate::state::AppState;

/// GET /api/v1/sessions/:id/export/pdf
/// The descriptor the client hands to its html2pdf pipeline.
pub async fn handle_pdf_descriptor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PdfExportDescriptor>, AppError> {
    let document = state
        .store
        .document(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(descriptor_for(&document)))
}
