//! Login handoff service module
//!
//! This module provides the complete cross-device login flow:
//! - Token issuance for the device that wants to log in
//! - Token claiming by an already-authenticated device
//! - Status polling until the claim lands
//! - Direct credential login minting sessions

mod service;

#[cfg(test)]
mod tests;

pub use service::LoginService;
