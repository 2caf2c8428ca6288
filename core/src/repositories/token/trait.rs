//! Token registry trait defining the interface for login token storage.

use async_trait::async_trait;

use crate::domain::entities::login_token::LoginToken;
use crate::errors::DomainResult;

/// Store contract for issued login tokens.
///
/// The registry only grows: tokens are recorded at issuance and kept for
/// the lifetime of the process. A real deployment would add expiry and
/// eviction behind this trait; the in-memory implementation deliberately
/// does not.
#[async_trait]
pub trait TokenRegistry: Send + Sync {
    /// Record a freshly issued token.
    ///
    /// # Arguments
    /// * `token` - The unclaimed token to record
    async fn issue(&self, token: LoginToken) -> DomainResult<()>;

    /// Bind a token to a user id.
    ///
    /// Claiming an already-claimed token overwrites the previous binding
    /// silently; callers that need to reject re-claims must check first.
    ///
    /// # Returns
    /// * `Ok(true)` - Token existed and is now bound to `userid`
    /// * `Ok(false)` - No such token was ever issued
    async fn claim(&self, token: &str, userid: &str) -> DomainResult<bool>;

    /// Look up a token by its identifier.
    ///
    /// # Returns
    /// * `Ok(Some(LoginToken))` - Token found, claimed or not
    /// * `Ok(None)` - No such token was ever issued
    async fn get(&self, token: &str) -> DomainResult<Option<LoginToken>>;

    /// Number of tokens currently held by the registry.
    async fn count(&self) -> DomainResult<usize>;
}
