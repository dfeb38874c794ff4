//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! member directory. NO HTTP - direct function calls.

use super::error::MemberError;
use super::model::{
    AdminCredential, AdminSession, Member, MemberFilter, NewMember, Page, PageRequest,
    PublicMember, PublicProfile, RosterExport,
};
use async_trait::async_trait;

/// Member directory API for inter-module communication
#[async_trait]
pub trait MemberDirectoryApi: Send + Sync {
    // ===== Anonymous operations =====

    /// Register a new member
    async fn register(&self, input: NewMember) -> Result<Member, MemberError>;

    /// Browse the redacted directory
    async fn list_public(
        &self,
        page: PageRequest,
        filter: MemberFilter,
    ) -> Result<Page<PublicMember>, MemberError>;

    /// Look up one member's public profile
    async fn get_public(&self, id_number: &str) -> Result<PublicProfile, MemberError>;

    /// Exchange the shared admin secret for a token
    async fn login(&self, password: &str) -> Result<AdminSession, MemberError>;

    // ===== Admin operations =====

    /// Full roster listing
    async fn list_admin(
        &self,
        credential: &AdminCredential,
        page: PageRequest,
        filter: MemberFilter,
    ) -> Result<Page<Member>, MemberError>;

    /// Distinct stored departments
    async fn distinct_departments(
        &self,
        credential: &AdminCredential,
    ) -> Result<Vec<String>, MemberError>;

    /// Distinct stored states of origin
    async fn distinct_states(&self, credential: &AdminCredential)
        -> Result<Vec<String>, MemberError>;

    /// Whole roster as a spreadsheet
    async fn export_roster(
        &self,
        credential: &AdminCredential,
    ) -> Result<RosterExport, MemberError>;
}
