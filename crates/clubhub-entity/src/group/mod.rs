//! Group domain entity.

pub mod model;

pub use model::Group;
