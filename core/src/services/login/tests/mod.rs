//! Tests for the login service

#[cfg(test)]
mod mocks;
