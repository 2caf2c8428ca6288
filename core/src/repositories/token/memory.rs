//! In-memory implementation of the token registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::login_token::LoginToken;
use crate::errors::DomainResult;

use super::trait_::TokenRegistry;

/// Process-local token registry backed by a guarded map.
///
/// The lock is held only for the duration of the map access, never across
/// an await on anything else.
#[derive(Clone)]
pub struct InMemoryTokenRegistry {
    tokens: Arc<RwLock<HashMap<String, LoginToken>>>,
}

impl InMemoryTokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRegistry for InMemoryTokenRegistry {
    async fn issue(&self, token: LoginToken) -> DomainResult<()> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn claim(&self, token: &str, userid: &str) -> DomainResult<bool> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(token) {
            Some(entry) => {
                entry.bind(userid);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get(&self, token: &str) -> DomainResult<Option<LoginToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn count(&self) -> DomainResult<usize> {
        let tokens = self.tokens.read().await;
        Ok(tokens.len())
    }
}
