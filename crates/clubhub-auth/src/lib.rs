//! # clubhub-auth
//!
//! The access-control core of ClubHub: deciding who may act on a resource
//! and granting time-boxed access without a login round-trip.
//!
//! ## Modules
//!
//! - `privilege` — effective privilege resolution from group membership
//! - `jwt` — signed, self-contained bearer credential issue and verify
//! - `link` — HMAC-signed export-link tokens (recomputed, never stored)
//! - `feed` — opaque persisted calendar feed tokens
//! - `password` — Argon2id password hashing (the opaque one-way function)
//!
//! Every service is constructed from explicit configuration; no secret is
//! ever global, and no secret is ever logged.

pub mod feed;
pub mod jwt;
pub mod link;
pub mod password;
pub mod privilege;

pub use feed::CalendarTokenService;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use link::LinkSigner;
pub use password::PasswordHasher;
pub use privilege::PrivilegeResolver;
