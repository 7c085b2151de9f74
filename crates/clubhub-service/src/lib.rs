//! # clubhub-service
//!
//! Business logic services for ClubHub. Each service orchestrates the
//! repositories and the access-control core; HTTP transport lives in a
//! separate tier and only ever calls into this crate.

pub mod auth;
pub mod calendar;
pub mod export;
pub mod group;

pub use auth::AuthService;
pub use calendar::CalendarFeedService;
pub use export::ExportLinkService;
pub use group::GroupService;
