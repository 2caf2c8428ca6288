//! Main login service implementation

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{LoginToken, Session};
use crate::domain::value_objects::{ClaimOutcome, IssuedToken, LoginOutcome, TokenStatus};
use crate::errors::DomainResult;
use crate::repositories::{CredentialStore, SessionStore, TokenRegistry};

/// Service coordinating the login-token handoff and direct login paths.
///
/// One instance owns the three stores for the process; the HTTP layer holds
/// it behind an `Arc` and every request goes through it. Business failures
/// (unknown token, bad credentials) are ordinary outcome variants, never
/// errors — only store failures surface as `DomainError`.
pub struct LoginService<T, C, S>
where
    T: TokenRegistry,
    C: CredentialStore,
    S: SessionStore,
{
    /// Registry of issued login tokens
    tokens: Arc<T>,
    /// Seeded credential store for direct login
    credentials: Arc<C>,
    /// Sessions minted by direct login
    sessions: Arc<S>,
}

impl<T, C, S> LoginService<T, C, S>
where
    T: TokenRegistry,
    C: CredentialStore,
    S: SessionStore,
{
    /// Create a new login service over the given stores.
    pub fn new(tokens: Arc<T>, credentials: Arc<C>, sessions: Arc<S>) -> Self {
        Self {
            tokens,
            credentials,
            sessions,
        }
    }

    /// Issue a fresh login token for a device that wants to log in.
    ///
    /// The token starts unclaimed and stays in the registry for the
    /// lifetime of the process.
    pub async fn issue_token(&self) -> DomainResult<IssuedToken> {
        let token = LoginToken::new();
        let id = token.token.clone();
        self.tokens.issue(token).await?;

        let count = self.tokens.count().await?;
        debug!(token = %id, registry_size = count, "issued login token");

        Ok(IssuedToken { token: id })
    }

    /// Bind an issued token to a user id.
    ///
    /// The user id is taken from the caller as-is; nothing here verifies it
    /// names an authenticated principal. Claiming an already-claimed token
    /// rebinds it silently — both properties are preserved from the system
    /// this service replaces and pinned by tests.
    ///
    /// # Returns
    /// * `Ok(ClaimOutcome::Bound)` - Token existed and is now bound
    /// * `Ok(ClaimOutcome::UnknownToken)` - No such token was ever issued
    pub async fn claim_token(&self, token: &str, userid: &str) -> DomainResult<ClaimOutcome> {
        if self.tokens.claim(token, userid).await? {
            info!(%userid, "login token claimed");
            Ok(ClaimOutcome::Bound)
        } else {
            debug!("claim attempted for unknown token");
            Ok(ClaimOutcome::UnknownToken)
        }
    }

    /// Read the current status of a token.
    ///
    /// This is the polling endpoint's backing read: a stateless
    /// point-in-time lookup, called repeatedly by the issuing device until
    /// the status becomes authenticated.
    pub async fn check_status(&self, token: &str) -> DomainResult<TokenStatus> {
        match self.tokens.get(token).await? {
            None => Ok(TokenStatus::UnknownToken),
            Some(entry) => match entry.bound_user {
                None => Ok(TokenStatus::Pending),
                Some(userid) => Ok(TokenStatus::Authenticated { userid }),
            },
        }
    }

    /// Authenticate with a user id and password.
    ///
    /// On success a fresh session replaces any prior session for the user.
    /// An unknown user id and a wrong password produce the same outcome, so
    /// callers cannot probe which part was wrong.
    pub async fn direct_login(&self, userid: &str, password: &str) -> DomainResult<LoginOutcome> {
        let Some(credential) = self.credentials.find(userid).await? else {
            debug!(%userid, "direct login for unknown user");
            return Ok(LoginOutcome::InvalidCredentials);
        };

        if !credential.matches(password) {
            debug!(%userid, "direct login with wrong password");
            return Ok(LoginOutcome::InvalidCredentials);
        }

        let session = Session::new(userid);
        let session_id = session.session_id;
        self.sessions.put(session).await?;

        info!(%userid, "direct login succeeded");
        debug!(%session_id, "session stored");

        Ok(LoginOutcome::Success { session_id })
    }
}
