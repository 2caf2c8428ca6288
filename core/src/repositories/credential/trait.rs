//! Credential store trait for the direct login path.

use async_trait::async_trait;

use crate::domain::entities::credential::Credential;
use crate::errors::DomainResult;

/// Store contract for user credentials.
///
/// Credentials are written once at startup from the seed configuration;
/// nothing in the request path inserts or removes them.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a credential, replacing any existing one for the same user.
    async fn insert(&self, credential: Credential) -> DomainResult<()>;

    /// Look up the credential for a user id.
    async fn find(&self, userid: &str) -> DomainResult<Option<Credential>>;
}
