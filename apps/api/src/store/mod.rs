//! In-memory session store. There is no persistence layer: a document lives
//! exactly as long as its session.
//!
//! Documents are held behind an `Arc` and only ever swapped whole. A reader
//! holding an earlier snapshot (the preview renderer, an outstanding
//! enhancement request) keeps a consistent value while an edit lands.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::resume::ResumeDocument;
use crate::models::theme::DEFAULT_THEME;

/// One editing session: a document plus the selected preview theme.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub document: Arc<ResumeDocument>,
    pub theme: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl DocumentStore {
    pub fn create(&self, document: ResumeDocument) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            document: Arc::new(document),
            theme: DEFAULT_THEME.to_string(),
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .expect("session store poisoned")
            .insert(session.id, session.clone());
        session
    }

    pub fn session(&self, id: Uuid) -> Option<Session> {
        self.sessions
            .read()
            .expect("session store poisoned")
            .get(&id)
            .cloned()
    }

    /// Current document snapshot for a session.
    pub fn document(&self, id: Uuid) -> Option<Arc<ResumeDocument>> {
        self.session(id).map(|s| s.document)
    }

    /// Read-modify-write under the write lock. The closure sees the
    /// document as it is at lock time, so two concurrent writers serialize
    /// instead of one clobbering the other's accepted update. Returns the
    /// new snapshot, or `None` if the session no longer exists.
    pub fn update(
        &self,
        id: Uuid,
        edit: impl FnOnce(&ResumeDocument) -> ResumeDocument,
    ) -> Option<Arc<ResumeDocument>> {
        let mut sessions = self.sessions.write().expect("session store poisoned");
        let session = sessions.get_mut(&id)?;
        session.document = Arc::new(edit(&session.document));
        Some(Arc::clone(&session.document))
    }

    /// Whole-document replacement, for callers that bring a complete new
    /// value rather than deriving one from the current document.
    /// Returns false if the session no longer exists.
    pub fn replace(&self, id: Uuid, document: ResumeDocument) -> bool {
        match self
            .sessions
            .write()
            .expect("session store poisoned")
            .get_mut(&id)
        {
            Some(session) => {
                session.document = Arc::new(document);
                true
            }
            None => false,
        }
    }

    pub fn set_theme(&self, id: Uuid, theme: String) -> bool {
        match self
            .sessions
            .write()
            .expect("session store poisoned")
            .get_mut(&id)
        {
            Some(session) => {
                session.theme = theme;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_fetch() {
        let store = DocumentStore::default();
        let session = store.create(ResumeDocument::sample());
        let doc = store.document(session.id).unwrap();
        assert_eq!(doc.personal.full_name, "Naseem Ahmad");
        assert_eq!(session.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_replace_swaps_snapshot_but_earlier_readers_keep_theirs() {
        let store = DocumentStore::default();
        let session = store.create(ResumeDocument::sample());

        let before = store.document(session.id).unwrap();
        let mut edited = (*before).clone();
        edited.personal.full_name = "Someone Else".to_string();
        assert!(store.replace(session.id, edited));

        // The snapshot taken before the replacement is untouched.
        assert_eq!(before.personal.full_name, "Naseem Ahmad");
        let after = store.document(session.id).unwrap();
        assert_eq!(after.personal.full_name, "Someone Else");
    }

    #[test]
    fn test_update_sees_writes_from_other_callers() {
        let store = DocumentStore::default();
        let session = store.create(ResumeDocument::default());

        // A snapshot taken here must not be what a later update builds on.
        let stale = store.document(session.id).unwrap();
        store.update(session.id, |doc| {
            let mut next = doc.clone();
            next.skills.push("Rust".to_string());
            next
        });
        assert!(stale.skills.is_empty());

        let updated = store
            .update(session.id, |doc| {
                let mut next = doc.clone();
                next.skills.push("LaTeX".to_string());
                next
            })
            .unwrap();
        assert_eq!(updated.skills, vec!["Rust", "LaTeX"]);
    }

    #[test]
    fn test_interleaved_updates_are_not_lost() {
        let store = Arc::new(DocumentStore::default());
        let session = store.create(ResumeDocument::default());

        let mut handles = Vec::new();
        for worker in 0..4 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    store.update(session.id, |doc| {
                        let mut next = doc.clone();
                        next.skills.push(format!("skill-{worker}-{i}"));
                        next
                    });
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Every writer's additions survive.
        assert_eq!(store.document(session.id).unwrap().skills.len(), 100);
    }

    #[test]
    fn test_update_unknown_session_is_none() {
        let store = DocumentStore::default();
        assert!(store
            .update(Uuid::new_v4(), |doc| doc.clone())
            .is_none());
    }

    #[test]
    fn test_replace_unknown_session_is_false() {
        let store = DocumentStore::default();
        assert!(!store.replace(Uuid::new_v4(), ResumeDocument::default()));
    }

    #[test]
    fn test_set_theme() {
        let store = DocumentStore::default();
        let session = store.create(ResumeDocument::default());
        assert!(store.set_theme(session.id, "modern".to_string()));
        assert_eq!(store.session(session.id).unwrap().theme, "modern");
        assert!(!store.set_theme(Uuid::new_v4(), "modern".to_string()));
    }
}
