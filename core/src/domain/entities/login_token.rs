//! Login token entity for the cross-device handoff flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-time login token exchanged out-of-band between two devices.
///
/// Tokens are created unclaimed by the issuing device and bound to a user
/// id when a second, already-authenticated device claims them. A token is
/// never deleted for the lifetime of the process; the registry only grows.
///
/// Binding is an overwrite: claiming an already-claimed token silently
/// rebinds it to the new user id. That matches the observed behavior of the
/// system this service replaces and is pinned by tests rather than fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginToken {
    /// Opaque unique token identifier
    pub token: String,

    /// User id this token is bound to, `None` while unclaimed
    pub bound_user: Option<String>,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp of the most recent claim, `None` while unclaimed
    pub claimed_at: Option<DateTime<Utc>>,
}

impl LoginToken {
    /// Creates a new unclaimed token with a random UUID v4 identifier.
    pub fn new() -> Self {
        Self::with_token(Uuid::new_v4().to_string())
    }

    /// Creates a new unclaimed token with the given identifier.
    ///
    /// Mainly useful in tests where a deterministic identifier is needed.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            bound_user: None,
            issued_at: Utc::now(),
            claimed_at: None,
        }
    }

    /// Binds the token to a user id, overwriting any previous binding.
    pub fn bind(&mut self, userid: impl Into<String>) {
        self.bound_user = Some(userid.into());
        self.claimed_at = Some(Utc::now());
    }

    /// Whether the token has been claimed by a user.
    pub fn is_claimed(&self) -> bool {
        self.bound_user.is_some()
    }
}

impl Default for LoginToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_unclaimed() {
        let token = LoginToken::new();
        assert!(!token.is_claimed());
        assert!(token.bound_user.is_none());
        assert!(token.claimed_at.is_none());
    }

    #[test]
    fn new_tokens_are_unique() {
        let a = LoginToken::new();
        let b = LoginToken::new();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn token_identifier_is_uuid() {
        let token = LoginToken::new();
        assert!(Uuid::parse_str(&token.token).is_ok());
    }

    #[test]
    fn bind_claims_the_token() {
        let mut token = LoginToken::with_token("abc");
        token.bind("u1");
        assert!(token.is_claimed());
        assert_eq!(token.bound_user.as_deref(), Some("u1"));
        assert!(token.claimed_at.is_some());
    }

    #[test]
    fn bind_overwrites_previous_binding() {
        let mut token = LoginToken::with_token("abc");
        token.bind("u1");
        token.bind("u2");
        assert_eq!(token.bound_user.as_deref(), Some("u2"));
    }

    #[test]
    fn token_serializes_round_trip() {
        let mut token = LoginToken::with_token("abc");
        token.bind("u1");

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: LoginToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
