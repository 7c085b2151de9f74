//! Calendar feed access via opaque tokens.

pub mod service;

pub use service::CalendarFeedService;
