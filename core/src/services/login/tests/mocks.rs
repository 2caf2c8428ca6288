//! Mock implementations for testing the login service

use async_trait::async_trait;

use crate::domain::entities::login_token::LoginToken;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TokenRegistry;

/// Token registry whose every operation fails, for error-propagation tests.
pub struct FailingTokenRegistry;

fn store_down() -> DomainError {
    DomainError::Store {
        message: "token registry unavailable".to_string(),
    }
}

#[async_trait]
impl TokenRegistry for FailingTokenRegistry {
    async fn issue(&self, _token: LoginToken) -> DomainResult<()> {
        Err(store_down())
    }

    async fn claim(&self, _token: &str, _userid: &str) -> DomainResult<bool> {
        Err(store_down())
    }

    async fn get(&self, _token: &str) -> DomainResult<Option<LoginToken>> {
        Err(store_down())
    }

    async fn count(&self) -> DomainResult<usize> {
        Err(store_down())
    }
}
