//! Credential entity for the direct login path.

use constant_time_eq::constant_time_eq;
use ql_shared::config::SeedUser;
use std::fmt;

/// A user id / password pair held by the credential store.
///
/// Credentials are seeded at process start and static afterwards; there is
/// no registration operation. Passwords are stored as given (this service
/// carries test-grade seed data and does no hashing), but comparison is
/// constant-time and the password never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// User identifier
    pub userid: String,

    password: String,
}

impl Credential {
    /// Creates a credential for the given user.
    pub fn new(userid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
            password: password.into(),
        }
    }

    /// Compares a candidate password against the stored one.
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.password.as_bytes(), candidate.as_bytes())
    }
}

impl From<SeedUser> for Credential {
    fn from(seed: SeedUser) -> Self {
        Self::new(seed.userid, seed.password)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("userid", &self.userid)
            .field("password", &"<redacted>")
            .finish()
    }
}
