//! Calendar feed token domain entity.

pub mod model;

pub use model::CalendarToken;
