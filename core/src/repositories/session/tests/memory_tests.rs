//! Tests for the in-memory session store.

use crate::domain::entities::session::Session;
use crate::repositories::session::{InMemorySessionStore, SessionStore};

#[tokio::test]
async fn stored_session_is_found_by_user() {
    let store = InMemorySessionStore::new();
    let session = Session::new("testuser1");
    let session_id = session.session_id;
    store.put(session).await.unwrap();

    let found = store.get("testuser1").await.unwrap().unwrap();
    assert_eq!(found.session_id, session_id);
}

#[tokio::test]
async fn login_overwrites_previous_session() {
    let store = InMemorySessionStore::new();
    let first = Session::new("testuser1");
    let first_id = first.session_id;
    store.put(first).await.unwrap();

    let second = Session::new("testuser1");
    let second_id = second.session_id;
    store.put(second).await.unwrap();

    let found = store.get("testuser1").await.unwrap().unwrap();
    assert_eq!(found.session_id, second_id);
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn user_without_login_has_no_session() {
    let store = InMemorySessionStore::new();
    assert!(store.get("testuser1").await.unwrap().is_none());
}
