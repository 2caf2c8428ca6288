//! Business services built on top of the domain layer.

pub mod login;

pub use login::LoginService;
