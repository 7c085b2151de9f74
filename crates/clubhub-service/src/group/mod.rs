//! Group management with administrator-group protection.

pub mod guards;
pub mod service;

pub use service::GroupService;
