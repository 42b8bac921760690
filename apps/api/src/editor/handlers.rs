use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::editor::{apply, EditCommand};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EditBatch {
    pub commands: Vec<EditCommand>,
}

/// POST /api/v1/sessions/:id/edits
/// Applies a batch of commands in order and replaces the session document
/// with the result. Returns the new document.
pub async fn handle_apply_edits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(batch): Json<EditBatch>,
) -> Result<Json<ResumeDocument>, AppError> {
    let updated = state
        .store
        .update(id, |current| {
            let mut next = current.clone();
            for command in batch.commands {
                next = apply(&next, command);
            }
            next
        })
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json((*updated).clone()))
}
