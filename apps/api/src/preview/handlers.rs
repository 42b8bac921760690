use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::theme::theme_by_name;
use crate::preview::render;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PreviewQuery {
    /// Optional one-off override of the session's selected theme.
    pub theme: Option<String>,
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let session = state
        .store
        .session(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let theme_name = query.theme.unwrap_or(session.theme);
    let theme = theme_by_name(&theme_name)
        .ok_or_else(|| AppError::Validation(format!("Unknown theme '{theme_name}'")))?;

    Ok(Html(render(&session.document, theme)))
}
