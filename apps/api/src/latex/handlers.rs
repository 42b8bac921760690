use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::latex::generate;
use crate::state::AppState;

/// GET /api/v1/sessions/:id/export/latex
/// The generated source as plain UTF-8 text, ready for Overleaf.
pub async fn handle_export_latex(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .store
        .document(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    let source = generate(&document);
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        source,
    ))
}
