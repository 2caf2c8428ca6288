//! Login route handlers
//!
//! This module contains the four operations of the handoff login flow:
//! - Token issuance (`GET /generateLoginToken`)
//! - Token claiming by a second device (`POST /validateLoginToken`)
//! - Status polling (`POST /checkLoginTokenStatus`)
//! - Direct credential login (`POST /doLogin`)

pub mod check_status;
pub mod claim_token;
pub mod direct_login;
pub mod issue_token;

pub use issue_token::AppState;
