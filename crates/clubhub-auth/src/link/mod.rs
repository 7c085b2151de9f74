//! Signed export-link capability tokens.

pub mod signer;

pub use signer::LinkSigner;
