//! In-memory chat sessions for the preparedness endpoint.
//!
//! Sessions are created lazily on first message, keyed by a
//! caller-supplied or generated identifier, and live for the process
//! lifetime. No eviction, TTL, or capacity bound — lifecycle management
//! belongs to an external resource manager if this is productionized.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::gemini::types::ChatTurn;

/// One conversation's accumulated state.
pub struct ChatSession {
    pub id: String,
    /// RFC 3339 creation timestamp.
    pub started_at: String,
    history: Vec<ChatTurn>,
}

impl ChatSession {
    fn new(id: String) -> Self {
        Self {
            id,
            started_at: chrono::Utc::now().to_rfc3339(),
            history: Vec::new(),
        }
    }

    /// Ordered history: oldest turn first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Record a completed exchange — the user message and the model's
    /// reply, in that order.
    pub fn push_turn(&mut self, user_text: &str, model_text: &str) {
        self.history.push(ChatTurn::user(user_text));
        self.history.push(ChatTurn::model(model_text));
    }
}

/// Shared handle to one session. The inner `Mutex` is the per-session
/// exclusion scope: a chat handler holds it across its whole
/// read-history → model call → append sequence, so concurrent turns on
/// one session serialize while other sessions proceed untouched.
pub type SessionHandle = Arc<Mutex<ChatSession>>;

/// Process-wide map from session identifier to session state.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a session: a known id returns the existing handle
    /// unchanged, an unknown id creates a session under that key, and
    /// an absent id creates a session under a fresh identifier unique
    /// among live sessions.
    pub async fn get_or_create(&self, requested: Option<&str>) -> (String, SessionHandle) {
        let mut sessions = self.sessions.write().await;

        let id = match requested {
            Some(id) => id.to_string(),
            None => {
                let mut id = Uuid::new_v4().to_string();
                while sessions.contains_key(&id) {
                    id = Uuid::new_v4().to_string();
                }
                id
            }
        };

        let handle = sessions
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(ChatSession::new(id.clone()))))
            .clone();

        (id, handle)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generated_ids_are_distinct() {
        let store = SessionStore::new();
        let (first, _) = store.get_or_create(None).await;
        let (second, _) = store.get_or_create(None).await;
        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn supplied_id_is_reused() {
        let store = SessionStore::new();
        let (id, handle) = store.get_or_create(Some("ops-desk")).await;
        assert_eq!(id, "ops-desk");

        handle.lock().await.push_turn("hello", "hi there");

        let (again, handle) = store.get_or_create(Some("ops-desk")).await;
        assert_eq!(again, "ops-desk");
        assert_eq!(store.len().await, 1);
        assert_eq!(handle.lock().await.history().len(), 2);
    }

    #[tokio::test]
    async fn history_grows_by_two_per_turn() {
        let store = SessionStore::new();
        let (_, handle) = store.get_or_create(Some("drill")).await;

        for turn in 1..=3 {
            let mut session = handle.lock().await;
            session.push_turn("question", "answer");
            assert_eq!(session.history().len(), turn * 2);
        }

        let session = handle.lock().await;
        assert_eq!(session.history()[0].role, crate::gemini::TurnRole::User);
        assert_eq!(session.history()[1].role, crate::gemini::TurnRole::Model);
    }

    #[tokio::test]
    async fn unknown_supplied_id_creates_session_under_that_key() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);
        let (id, _) = store.get_or_create(Some("preexisting-key")).await;
        assert_eq!(id, "preexisting-key");
        assert_eq!(store.len().await, 1);
    }
}
