//! Session entity created on successful direct login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session minted by the direct login path.
///
/// A fresh session replaces any prior session for the same user on every
/// successful login. Sessions have no expiry and the identifier is never
/// returned to callers; it exists so a future consuming endpoint has
/// something to look up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User the session belongs to
    pub userid: String,

    /// Opaque session identifier
    pub session_id: Uuid,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session for the given user with a random identifier.
    pub fn new(userid: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}
