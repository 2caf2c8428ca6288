//! Boundary helpers shared by the route handlers.

pub mod decode;

pub use decode::{decode_json, internal_error_response};
