//! Shared utilities and common types for the QrLogin server
//!
//! This crate provides common functionality used across the server crates:
//! - Configuration types (server binding, seed accounts)
//! - Legacy wire types shared between the API layer and its tests

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, SeedConfig, SeedUser, ServerConfig};
pub use types::ErrorBody;
