//! Contract models for member directory
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, NaiveDate, Utc};

/// Role claim carried by every admin token
pub const ADMIN_ROLE: &str = "admin";

/// Stored member record (the privileged, unredacted view)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Storage-assigned identity, increasing in insertion order
    pub id: i32,
    /// Externally supplied student ID number
    pub id_number: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    /// Free-form department name
    pub department: String,
    pub date_of_birth: NaiveDate,
    pub state_of_origin: String,
    pub interests: String,
    pub hobbies: String,
    pub best_engineering_quote: String,
    /// Server-assigned creation time
    pub submitted_at: DateTime<Utc>,
}

/// Registration input as submitted by the caller.
///
/// Fields are raw strings; an empty string means the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    pub id_number: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub department: String,
    /// `YYYY-MM-DD` (an RFC 3339 timestamp is accepted as well)
    pub date_of_birth: String,
    pub state_of_origin: String,
    pub interests: String,
    pub hobbies: String,
    pub best_engineering_quote: String,
}

/// Directory list entry: no contact fields, no birth year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicMember {
    pub id_number: String,
    pub full_name: String,
    pub department: String,
    pub interests: String,
    pub hobbies: String,
    pub best_engineering_quote: String,
    /// Birthday as "Month Day", e.g. "March 15"
    pub day_month: String,
}

/// Single-member public lookup: the list entry plus state of origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicProfile {
    pub id_number: String,
    pub full_name: String,
    pub department: String,
    pub interests: String,
    pub hobbies: String,
    pub state_of_origin: String,
    pub best_engineering_quote: String,
    pub day_month: String,
}

/// Optional list filters, ANDed together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    /// Case-insensitive substring of the full name
    pub search: Option<String>,
    /// Exact department
    pub department: Option<String>,
    /// Exact state of origin (admin listing only)
    pub state_of_origin: Option<String>,
}

impl MemberFilter {
    /// Build a filter, treating empty strings as "not provided"
    pub fn new(
        search: Option<String>,
        department: Option<String>,
        state_of_origin: Option<String>,
    ) -> Self {
        Self {
            search: non_empty(search),
            department: non_empty(department),
            state_of_origin: non_empty(state_of_origin),
        }
    }

    /// Filter on the name only
    pub fn search(text: impl Into<String>) -> Self {
        Self::new(Some(text.into()), None, None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Requested page; `None` falls back to the configured defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// Pagination metadata returned with every list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Compute page count and navigation flags for `total` matches.
    ///
    /// `limit` must be positive.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = total.div_ceil(u64::from(limit));
        Self {
            page,
            limit,
            total,
            pages,
            has_next: u64::from(page) < pages,
            has_prev: page > 1,
        }
    }

    /// Number of records preceding this page
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Bearer credential presented on admin calls
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredential(String);

impl AdminCredential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse an `Authorization` header value (`Bearer <token>`)
    pub fn from_authorization(header: &str) -> Option<Self> {
        let token = header.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminCredential(***)")
    }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub role: String,
}

impl AdminSession {
    pub fn credential(&self) -> AdminCredential {
        AdminCredential::bearer(self.token.clone())
    }
}

/// Spreadsheet export of the whole roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl RosterExport {
    pub const CONTENT_TYPE: &'static str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
}
