pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::editor::handlers as editor_handlers;
use crate::enhance::handlers as enhance_handlers;
use crate::export::handlers as export_handlers;
use crate::latex::handlers as latex_handlers;
use crate::preview::handlers as preview_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Themes
        .route("/api/v1/themes", get(store_handlers::handle_list_themes))
        // Session & document
        .route(
            "/api/v1/sessions",
            post(store_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id/document",
            get(store_handlers::handle_get_document).put(store_handlers::handle_replace_document),
        )
        .route(
            "/api/v1/sessions/:id/theme",
            put(store_handlers::handle_set_theme),
        )
        // Editing
        .route(
            "/api/v1/sessions/:id/edits",
            post(editor_handlers::handle_apply_edits),
        )
        // Rendering & export
        .route(
            "/api/v1/sessions/:id/preview",
            get(preview_handlers::handle_preview),
        )
        .route(
            "/api/v1/sessions/:id/export/latex",
            get(latex_handlers::handle_export_latex),
        )
        .route(
            "/api/v1/sessions/:id/export/pdf",
            get(export_handlers::handle_pdf_descriptor),
        )
        // AI enhancement
        .route(
            "/api/v1/sessions/:id/enhance/summary",
            post(enhance_handlers::handle_enhance_summary),
        )
        .route(
            "/api/v1/sessions/:id/enhance/experience/:exp_id",
            post(enhance_handlers::handle_enhance_experience),
        )
        .with_state(state)
}
