//! Privilege domain entity.

pub mod model;

pub use model::Privilege;
