//! In-memory implementation of the credential store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::credential::Credential;
use crate::errors::DomainResult;

use super::trait_::CredentialStore;

/// Process-local credential store backed by a guarded map.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    credentials: Arc<RwLock<HashMap<String, Credential>>>,
}

impl InMemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, credential: Credential) -> DomainResult<()> {
        let mut credentials = self.credentials.write().await;
        credentials.insert(credential.userid.clone(), credential);
        Ok(())
    }

    async fn find(&self, userid: &str) -> DomainResult<Option<Credential>> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(userid).cloned())
    }
}
