//! Session store trait.

use async_trait::async_trait;

use crate::domain::entities::session::Session;
use crate::errors::DomainResult;

/// Store contract for login sessions, keyed by user id.
///
/// One session per user: storing a session replaces any prior one.
/// Sessions are never evicted.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session, replacing any existing session for the same user.
    async fn put(&self, session: Session) -> DomainResult<()>;

    /// Look up the current session for a user id.
    async fn get(&self, userid: &str) -> DomainResult<Option<Session>>;
}
