//! HTTP route handlers.

pub mod login;
