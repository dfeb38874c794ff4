//! REST DTOs with serde derives for HTTP API
//!
//! Wire names are camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

// ===== Member DTOs =====

/// Full member record (admin view and registration echo)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    /// Storage identity
    pub id: i32,

    #[schema(example = "22/05/04/0011")]
    pub id_number: String,

    #[schema(example = "Jane Doe")]
    pub full_name: String,

    pub phone_number: String,
    pub email: String,

    #[schema(example = "Mechanical Engineering")]
    pub department: String,

    #[schema(value_type = String, format = Date, example = "1999-07-04")]
    pub date_of_birth: NaiveDate,

    pub state_of_origin: String,
    pub interests: String,
    pub hobbies: String,
    pub best_engineering_quote: String,

    /// Server-assigned registration time
    pub submitted_at: DateTime<Utc>,
}

/// Registration form.
///
/// Every field is required; absent, `null` and empty values are reported the
/// same way. Non-string values are rejected with the field name.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterMemberRequest {
    #[schema(value_type = Option<String>)]
    pub id_number: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub full_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub department: Option<Value>,
    /// `YYYY-MM-DD`
    #[schema(value_type = Option<String>)]
    pub date_of_birth: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub state_of_origin: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub interests: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub hobbies: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub best_engineering_quote: Option<Value>,
}

/// Registration result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterMemberResponse {
    pub success: bool,
    pub member: MemberDto,
}

/// Directory list entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicMemberDto {
    pub id_number: String,
    pub full_name: String,
    pub department: String,
    pub interests: String,
    pub hobbies: String,
    pub best_engineering_quote: String,
    /// Birthday without the year
    #[schema(example = "July 4")]
    pub day_month: String,
}

/// Public profile of a single member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub id_number: String,
    pub full_name: String,
    pub department: String,
    pub interests: String,
    pub hobbies: String,
    pub state_of_origin: String,
    pub best_engineering_quote: String,
    #[schema(example = "July 4")]
    pub day_month: String,
}

// ===== List DTOs =====

/// Pagination metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Page of the public directory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicMemberListResponse {
    pub members: Vec<PublicMemberDto>,
    pub pagination: PaginationDto,
}

/// Page of the full roster
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminMemberListResponse {
    pub members: Vec<MemberDto>,
    pub pagination: PaginationDto,
}

/// Public directory query.
///
/// `page` and `limit` that are not positive integers fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PublicListQuery {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// Case-insensitive substring of the full name
    pub search: Option<String>,
    /// Exact department
    pub department: Option<String>,
}

/// Admin roster query
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminListQuery {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// Case-insensitive substring of the full name
    pub search: Option<String>,
    /// Exact department
    pub department: Option<String>,
    /// Exact state of origin
    pub state: Option<String>,
}

// ===== Auth DTOs =====

/// Admin login request; a missing password counts as a wrong one
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    #[schema(example = "admin")]
    pub role: String,
}

/// Admin login result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the admin endpoints
    pub token: String,
    pub user: SessionUserDto,
}

// ===== Misc =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

// Note: Conversion implementations live in mapper.rs
