//! Signed export links for generated documents.

pub mod service;

pub use service::ExportLinkService;
