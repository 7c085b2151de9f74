//! Opaque calendar feed tokens.

pub mod service;

pub use service::CalendarTokenService;
