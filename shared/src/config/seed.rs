//! Seed account configuration.
//!
//! The credential store has no registration operation; the only accounts it
//! ever holds are the ones loaded here at process start.

use serde::{Deserialize, Serialize};
use std::env;

/// A single seeded user id / password pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedUser {
    /// User identifier
    pub userid: String,

    /// Plain-text password (test-grade data, no hashing in this service)
    pub password: String,
}

/// Accounts loaded into the credential store at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Users to seed
    #[serde(default = "default_users")]
    pub users: Vec<SeedUser>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

impl SeedConfig {
    /// Load seed accounts from the `SEED_USERS` environment variable.
    ///
    /// The format is `user:pass,user:pass`. An unset variable, or one with
    /// no valid entry, keeps the default three test accounts.
    pub fn from_env() -> Self {
        match env::var("SEED_USERS") {
            Ok(raw) => {
                let users = parse_seed_users(&raw);
                if users.is_empty() {
                    Self::default()
                } else {
                    Self { users }
                }
            }
            Err(_) => Self::default(),
        }
    }
}

/// Parse a `user:pass,user:pass` list. Entries without a `:` or with an
/// empty user id are skipped.
fn parse_seed_users(raw: &str) -> Vec<SeedUser> {
    raw.split(',')
        .filter_map(|entry| {
            let (userid, password) = entry.trim().split_once(':')?;
            if userid.is_empty() {
                return None;
            }
            Some(SeedUser {
                userid: userid.to_string(),
                password: password.to_string(),
            })
        })
        .collect()
}

fn default_users() -> Vec<SeedUser> {
    // Legacy test accounts: password equals the user id.
    ["testuser1", "testuser2", "testuser3"]
        .into_iter()
        .map(|id| SeedUser {
            userid: id.to_string(),
            password: id.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_three_test_accounts() {
        let config = SeedConfig::default();
        assert_eq!(config.users.len(), 3);
        for user in &config.users {
            assert_eq!(user.userid, user.password);
            assert!(user.userid.starts_with("testuser"));
        }
    }

    #[test]
    fn parses_seed_users_format() {
        let users = parse_seed_users("alice:secret, bob:hunter2 ,:broken,plain");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].userid, "alice");
        assert_eq!(users[0].password, "secret");
        assert_eq!(users[1].userid, "bob");
        assert_eq!(users[1].password, "hunter2");
    }

    #[test]
    fn empty_password_is_allowed() {
        let users = parse_seed_users("alice:");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password, "");
    }
}
