//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::MemberDirectoryApi;
pub use error::MemberError;
pub use model::{
    AdminCredential, AdminSession, Member, MemberFilter, NewMember, Page, PageRequest,
    Pagination, PublicMember, PublicProfile, RosterExport, ADMIN_ROLE,
};
