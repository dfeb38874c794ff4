//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Member, MemberFilter};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Validated registration ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemberRecord {
    pub id_number: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub department: String,
    pub date_of_birth: NaiveDate,
    pub state_of_origin: String,
    pub interests: String,
    pub hobbies: String,
    pub best_engineering_quote: String,
    pub submitted_at: DateTime<Utc>,
}

/// Columns that support distinct-value lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Department,
    StateOfOrigin,
}

/// Repository for member records.
///
/// Multi-record reads return insertion order. No uniqueness is enforced on
/// `id_number` at this layer.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert one record and return it with its storage id
    async fn insert(&self, record: &NewMemberRecord) -> Result<Member>;

    /// Count records matching the filter
    async fn count(&self, filter: &MemberFilter) -> Result<u64>;

    /// Records matching the filter, skipping `skip` and returning at most `limit`
    async fn find(&self, filter: &MemberFilter, skip: u64, limit: u64) -> Result<Vec<Member>>;

    /// First record with the exact ID number
    async fn find_by_id_number(&self, id_number: &str) -> Result<Option<Member>>;

    /// Distinct values of a column, ascending
    async fn distinct(&self, field: MemberField) -> Result<Vec<String>>;

    /// Every record
    async fn list_all(&self) -> Result<Vec<Member>>;
}
