//! In-memory implementation of the session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::session::Session;
use crate::errors::DomainResult;

use super::trait_::SessionStore;

/// Process-local session store backed by a guarded map.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session: Session) -> DomainResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.userid.clone(), session);
        Ok(())
    }

    async fn get(&self, userid: &str) -> DomainResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(userid).cloned())
    }
}
