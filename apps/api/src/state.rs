use std::sync::Arc;

use crate::config::Config;
use crate::enhance::{Enhancer, InFlight};
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    /// Pluggable enhancement backend. Production: `GeminiEnhancer`.
    pub enhancer: Arc<dyn Enhancer>,
    /// One outstanding enhancement request per (session, field).
    pub in_flight: Arc<InFlight>,
    pub config: Config,
}
