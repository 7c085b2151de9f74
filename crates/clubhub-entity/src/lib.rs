//! # clubhub-entity
//!
//! Domain entity models for ClubHub: users, groups, privileges, and the
//! persisted calendar feed token row.

pub mod calendar_token;
pub mod group;
pub mod privilege;
pub mod user;

pub use calendar_token::CalendarToken;
pub use group::Group;
pub use privilege::Privilege;
pub use user::User;
