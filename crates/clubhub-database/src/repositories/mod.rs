//! Concrete repository implementations.

pub mod calendar_token;
pub mod group;
pub mod user;

pub use calendar_token::CalendarTokenRepository;
pub use group::GroupRepository;
pub use user::UserRepository;
