//! Collaborator traits consumed by the access-control core.
//!
//! The core is handed already-loaded entities and never owns storage; these
//! traits are the narrow seams through which persistence is reached.

pub mod calendar_token;
pub mod user_loader;

pub use calendar_token::CalendarTokenStore;
pub use user_loader::UserLoader;
