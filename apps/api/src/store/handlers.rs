use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::models::theme::{theme_by_name, ThemeConfig, THEMES};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub theme: String,
    pub created_at: DateTime<Utc>,
    pub document: ResumeDocument,
}

/// POST /api/v1/sessions
/// Opens a new session seeded with the sample resume.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.store.create(ResumeDocument::sample());
    tracing::info!("Session {} created", session.id);
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.id,
            theme: session.theme,
            created_at: session.created_at,
            document: (*session.document).clone(),
        }),
    )
}

/// GET /api/v1/sessions/:id/document
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = state
        .store
        .document(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json((*document).clone()))
}

/// PUT /api/v1/sessions/:id/document
/// Whole-document replacement, mirroring the store's only mutation.
pub async fn handle_replace_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(document): Json<ResumeDocument>,
) -> Result<StatusCode, AppError> {
    if !state.store.replace(id, document) {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ThemeSelection {
    pub theme: String,
}

/// PUT /api/v1/sessions/:id/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selection): Json<ThemeSelection>,
) -> Result<StatusCode, AppError> {
    if theme_by_name(&selection.theme).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown theme '{}'",
            selection.theme
        )));
    }
    if !state.store.set_theme(id, selection.theme) {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct NamedTheme {
    pub name: &'static str,
    #[serde(flatten)]
    pub config: ThemeConfig,
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<Vec<NamedTheme>> {
    Json(
        THEMES
            .iter()
            .map(|(name, config)| NamedTheme {
                name,
                config: *config,
            })
            .collect(),
    )
}
