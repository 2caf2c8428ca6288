//! Store interfaces and their in-memory implementations.
//!
//! The original system kept three process-global maps; here each map is an
//! injected store behind a trait so the service owns explicit state and
//! tests can substitute failing implementations. The in-memory stores are
//! the production ones for this service.

pub mod credential;
pub mod session;
pub mod token;

pub use credential::{CredentialStore, InMemoryCredentialStore};
pub use session::{InMemorySessionStore, SessionStore};
pub use token::{InMemoryTokenRegistry, TokenRegistry};
