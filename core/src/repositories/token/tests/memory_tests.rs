//! Tests for the in-memory token registry.

use crate::domain::entities::login_token::LoginToken;
use crate::repositories::token::{InMemoryTokenRegistry, TokenRegistry};

#[tokio::test]
async fn issued_token_is_retrievable_and_unclaimed() {
    let registry = InMemoryTokenRegistry::new();
    registry.issue(LoginToken::with_token("abc")).await.unwrap();

    let stored = registry.get("abc").await.unwrap().unwrap();
    assert_eq!(stored.token, "abc");
    assert!(!stored.is_claimed());
}

#[tokio::test]
async fn claim_binds_existing_token() {
    let registry = InMemoryTokenRegistry::new();
    registry.issue(LoginToken::with_token("abc")).await.unwrap();

    assert!(registry.claim("abc", "u1").await.unwrap());

    let stored = registry.get("abc").await.unwrap().unwrap();
    assert_eq!(stored.bound_user.as_deref(), Some("u1"));
}

#[tokio::test]
async fn claim_of_unknown_token_reports_false() {
    let registry = InMemoryTokenRegistry::new();
    assert!(!registry.claim("never-issued", "u1").await.unwrap());
    assert!(registry.get("never-issued").await.unwrap().is_none());
}

#[tokio::test]
async fn reclaim_overwrites_binding() {
    let registry = InMemoryTokenRegistry::new();
    registry.issue(LoginToken::with_token("abc")).await.unwrap();

    assert!(registry.claim("abc", "u1").await.unwrap());
    assert!(registry.claim("abc", "u2").await.unwrap());

    let stored = registry.get("abc").await.unwrap().unwrap();
    assert_eq!(stored.bound_user.as_deref(), Some("u2"));
}

#[tokio::test]
async fn registry_only_grows() {
    let registry = InMemoryTokenRegistry::new();
    assert_eq!(registry.count().await.unwrap(), 0);

    for _ in 0..5 {
        registry.issue(LoginToken::new()).await.unwrap();
    }
    assert_eq!(registry.count().await.unwrap(), 5);

    // Claiming mutates, it never removes.
    registry.issue(LoginToken::with_token("abc")).await.unwrap();
    registry.claim("abc", "u1").await.unwrap();
    assert_eq!(registry.count().await.unwrap(), 6);
}
