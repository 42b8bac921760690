use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::editor::{apply, EditCommand};
use crate::enhance::{bullets_or_original, summary_or_original, EnhanceField};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// POST /api/v1/sessions/:id/enhance/summary
///
/// Reads the current summary, asks the model for a rewrite, and writes the
/// result back against the document as it is at completion time — not the
/// snapshot the request started from. On any enhancement failure the
/// summary is written back unchanged.
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let snapshot = state.store.document(id).ok_or_else(|| session_not_found(id))?;

    let _guard = state
        .in_flight
        .try_begin(id, EnhanceField::Summary)
        .ok_or_else(|| {
            AppError::Conflict("summary enhancement already in progress".to_string())
        })?;

    let enhanced = summary_or_original(state.enhancer.as_ref(), &snapshot.personal.summary).await;

    let updated = state
        .store
        .update(id, |current| {
            apply(current, EditCommand::SetSummary { value: enhanced })
        })
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json((*updated).clone()))
}

/// POST /api/v1/sessions/:id/enhance/experience/:exp_id
///
/// Joins the entry's description lines into one text, asks the model for
/// bullet points, and writes them back by entry id. If the entry was
/// removed while the request was outstanding, the write-back command is a
/// no-op and the document is returned unchanged.
pub async fn handle_enhance_experience(
    State(state): State<AppState>,
    Path((id, exp_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ResumeDocument>, AppError> {
    let snapshot = state.store.document(id).ok_or_else(|| session_not_found(id))?;
    let entry = snapshot
        .experience
        .iter()
        .find(|e| e.id == exp_id)
        .ok_or_else(|| AppError::NotFound(format!("Experience entry {exp_id} not found")))?;

    let _guard = state
        .in_flight
        .try_begin(id, EnhanceField::Experience(exp_id))
        .ok_or_else(|| {
            AppError::Conflict("bullet enhancement already in progress for this entry".to_string())
        })?;

    let input = entry.description.join(" ");
    let bullets = bullets_or_original(state.enhancer.as_ref(), &input).await;

    let updated = state
        .store
        .update(id, |current| {
            apply(
                current,
                EditCommand::SetExperienceDescription {
                    id: exp_id,
                    lines: bullets,
                },
            )
        })
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json((*updated).clone()))
}
