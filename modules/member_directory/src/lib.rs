//! Member Directory Module
//!
//! Membership registration and directory for the fellowship chapter.
//! Anonymous callers register and browse a redacted directory; the
//! administrator signs in with the shared secret and reads the full roster.

// Public exports
pub mod contract;
pub use contract::{
    client::MemberDirectoryApi, error::MemberError, AdminCredential, AdminSession, Member,
    MemberFilter, NewMember, Page, PageRequest, Pagination, PublicMember, PublicProfile,
    RosterExport,
};

pub mod module;
pub use module::MemberDirectoryModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
