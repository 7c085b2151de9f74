//! # clubhub-core
//!
//! Core crate for ClubHub. Contains the configuration schemas, collaborator
//! traits, and the unified error system shared by every other crate. Its
//! only internal dependency is `clubhub-entity`, for the entity types the
//! collaborator traits speak in.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
