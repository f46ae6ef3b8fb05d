//! Shared state for the API router.

use std::sync::Arc;

use crate::gemini::ModelClient;
use crate::session::SessionStore;

/// Shared context for all handlers: the provider client and the chat
/// session store. Cheap to clone — both halves are `Arc`s. This is the
/// whole of the process's mutable state; nothing lives in globals.
#[derive(Clone)]
pub struct ApiContext {
    pub model: Arc<dyn ModelClient>,
    pub sessions: Arc<SessionStore>,
}

impl ApiContext {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self {
            model,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}
