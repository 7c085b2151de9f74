//! Login and credential verification flow.

pub mod service;

pub use service::AuthService;
