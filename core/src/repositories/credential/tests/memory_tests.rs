//! Tests for the in-memory credential store.

use crate::domain::entities::credential::Credential;
use crate::repositories::credential::{CredentialStore, InMemoryCredentialStore};

#[tokio::test]
async fn inserted_credential_is_found() {
    let store = InMemoryCredentialStore::new();
    store
        .insert(Credential::new("testuser1", "testuser1"))
        .await
        .unwrap();

    let found = store.find("testuser1").await.unwrap().unwrap();
    assert_eq!(found.userid, "testuser1");
    assert!(found.matches("testuser1"));
}

#[tokio::test]
async fn unknown_user_is_absent() {
    let store = InMemoryCredentialStore::new();
    assert!(store.find("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn insert_replaces_existing_credential() {
    let store = InMemoryCredentialStore::new();
    store
        .insert(Credential::new("testuser1", "old"))
        .await
        .unwrap();
    store
        .insert(Credential::new("testuser1", "new"))
        .await
        .unwrap();

    let found = store.find("testuser1").await.unwrap().unwrap();
    assert!(found.matches("new"));
    assert!(!found.matches("old"));
}
