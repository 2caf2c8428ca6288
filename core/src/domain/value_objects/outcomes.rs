//! Typed outcomes for the login operations.
//!
//! The wire contract reports business failures (unknown token, bad
//! credentials) as ordinary 200 responses distinguished only by payload.
//! Inside the domain they are explicit variants instead; the API layer
//! translates them to the legacy shapes at the boundary.

use uuid::Uuid;

/// Result of issuing a fresh login token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The opaque token identifier handed to the requesting device
    pub token: String,
}

/// Result of attempting to claim a login token for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The token exists and is now bound to the supplied user id
    Bound,

    /// No token with the supplied identifier was ever issued
    UnknownToken,
}

/// Point-in-time status of a login token, as seen by the polling device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// No token with the supplied identifier was ever issued
    UnknownToken,

    /// Issued but not yet claimed
    Pending,

    /// Claimed; the handoff is complete
    Authenticated {
        /// User id the token was claimed for
        userid: String,
    },
}

/// Result of a direct credential login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; a fresh session was stored.
    ///
    /// The session id never crosses the HTTP boundary; it is carried here
    /// so service-level tests can observe it.
    Success {
        /// Identifier of the newly minted session
        session_id: Uuid,
    },

    /// Unknown user id or wrong password; callers cannot tell which
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_status_carries_userid() {
        let status = TokenStatus::Authenticated {
            userid: "u1".to_string(),
        };
        assert_ne!(status, TokenStatus::Pending);
        match status {
            TokenStatus::Authenticated { userid } => assert_eq!(userid, "u1"),
            _ => panic!("expected authenticated status"),
        }
    }
}
