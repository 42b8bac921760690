//! AI text enhancement — summary rewrite and bullet polishing.
//!
//! Failure policy (applies to network errors, API errors, and malformed
//! response shapes alike): the caller's original text is kept, the failure
//! is logged, and no error state ever reaches the client. Enhancement is
//! repeatable but not deterministic, so the only unit-testable behavior is
//! the identity fallback.

pub mod client;
pub mod handlers;
pub mod prompts;

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::enhance::client::{EnhanceError, GeminiClient};
use crate::enhance::prompts::{
    bullets_generation_config, BULLETS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};

/// The enhancement seam. `AppState` carries an `Arc<dyn Enhancer>` so tests
/// can substitute canned or failing backends for the Gemini-backed one.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance_summary(&self, text: &str) -> Result<String, EnhanceError>;
    async fn enhance_bullets(&self, text: &str) -> Result<Vec<String>, EnhanceError>;
}

#[derive(Debug, Deserialize)]
struct BulletsResponse {
    bullets: Vec<String>,
}

/// Production enhancer backed by the Gemini API.
pub struct GeminiEnhancer {
    client: GeminiClient,
}

impl GeminiEnhancer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
        }
    }
}

#[async_trait]
impl Enhancer for GeminiEnhancer {
    async fn enhance_summary(&self, text: &str) -> Result<String, EnhanceError> {
        let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{summary}", text);
        self.client.call(&prompt, None).await
    }

    async fn enhance_bullets(&self, text: &str) -> Result<Vec<String>, EnhanceError> {
        let prompt = BULLETS_PROMPT_TEMPLATE.replace("{text}", text);
        let response: BulletsResponse = self
            .client
            .call_json(&prompt, Some(bullets_generation_config()))
            .await?;
        Ok(response.bullets)
    }
}

/// Enhances a summary, keeping the input on any failure.
pub async fn summary_or_original(enhancer: &dyn Enhancer, text: &str) -> String {
    match enhancer.enhance_summary(text).await {
        Ok(enhanced) => enhanced,
        Err(e) => {
            warn!("summary enhancement failed, keeping original: {e}");
            text.to_string()
        }
    }
}

/// Enhances a description, keeping the input as a single bullet on any
/// failure.
pub async fn bullets_or_original(enhancer: &dyn Enhancer, text: &str) -> Vec<String> {
    match enhancer.enhance_bullets(text).await {
        Ok(bullets) => bullets,
        Err(e) => {
            warn!("bullet enhancement failed, keeping original: {e}");
            vec![text.to_string()]
        }
    }
}

/// A field that can have at most one outstanding enhancement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnhanceField {
    Summary,
    Experience(Uuid),
}

/// Outstanding-request registry keyed by (session, field). A second request
/// against the same field is rejected while one is in flight; requests
/// against different fields proceed concurrently.
#[derive(Debug, Default)]
pub struct InFlight {
    keys: Mutex<HashSet<(Uuid, EnhanceField)>>,
}

impl InFlight {
    /// Registers an outstanding request, or returns `None` if one is
    /// already in flight for this field.
    pub fn try_begin(&self, session: Uuid, field: EnhanceField) -> Option<InFlightGuard<'_>> {
        let mut keys = self.keys.lock().expect("in-flight set poisoned");
        if !keys.insert((session, field)) {
            return None;
        }
        Some(InFlightGuard {
            registry: self,
            key: (session, field),
        })
    }
}

/// Clears the in-flight mark when the request completes, on every exit path.
pub struct InFlightGuard<'a> {
    registry: &'a InFlight,
    key: (Uuid, EnhanceField),
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.registry
            .keys
            .lock()
            .expect("in-flight set poisoned")
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every call, for exercising the fallback path.
    struct FailingEnhancer;

    #[async_trait]
    impl Enhancer for FailingEnhancer {
        async fn enhance_summary(&self, _text: &str) -> Result<String, EnhanceError> {
            Err(EnhanceError::EmptyContent)
        }

        async fn enhance_bullets(&self, _text: &str) -> Result<Vec<String>, EnhanceError> {
            Err(EnhanceError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_summary_failure_falls_back_to_identity() {
        let result = summary_or_original(&FailingEnhancer, "Hello").await;
        assert_eq!(result, "Hello");
    }

    #[tokio::test]
    async fn test_bullets_failure_falls_back_to_single_bullet() {
        let result = bullets_or_original(&FailingEnhancer, "Did things").await;
        assert_eq!(result, vec!["Did things".to_string()]);
    }

    #[test]
    fn test_in_flight_rejects_duplicate_field() {
        let registry = InFlight::default();
        let session = Uuid::new_v4();
        let guard = registry.try_begin(session, EnhanceField::Summary);
        assert!(guard.is_some());
        assert!(registry.try_begin(session, EnhanceField::Summary).is_none());
    }

    #[test]
    fn test_in_flight_allows_different_fields() {
        let registry = InFlight::default();
        let session = Uuid::new_v4();
        let _summary = registry.try_begin(session, EnhanceField::Summary).unwrap();
        let exp = registry.try_begin(session, EnhanceField::Experience(Uuid::new_v4()));
        assert!(exp.is_some());
    }

    #[test]
    fn test_in_flight_guard_frees_on_drop() {
        let registry = InFlight::default();
        let session = Uuid::new_v4();
        {
            let _guard = registry.try_begin(session, EnhanceField::Summary).unwrap();
        }
        assert!(registry.try_begin(session, EnhanceField::Summary).is_some());
    }
}
