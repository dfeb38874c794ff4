//! HTTP request handlers - thin layer that delegates to domain service

use crate::contract::{AdminCredential, MemberError, NewMember, RosterExport};
use crate::domain::Service;
use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Pull the bearer credential out of the `Authorization` header
pub fn bearer_credential(headers: &HeaderMap) -> Result<AdminCredential, Problem> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(AdminCredential::from_authorization)
        .ok_or_else(|| map_domain_error(MemberError::Unauthorized))
}

// ===== Registration =====

/// Register a new member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = RegisterMemberRequest,
    responses(
        (status = 201, description = "Member registered", body = RegisterMemberResponse),
        (status = 400, description = "Missing required field", body = Problem),
        (status = 409, description = "ID number already exists", body = Problem),
        (status = 500, description = "Storage failure", body = Problem)
    )
)]
pub async fn register_member(
    service: Arc<Service>,
    Json(req): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<RegisterMemberResponse>), Problem> {
    let member = service.register(NewMember::try_from(req)?).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterMemberResponse {
            success: true,
            member: member.into(),
        }),
    ))
}

// ===== Public directory =====

/// Browse the public directory
#[utoipa::path(
    get,
    path = "/members/public",
    tag = "members",
    params(PublicListQuery),
    responses(
        (status = 200, description = "Page of public members", body = PublicMemberListResponse),
        (status = 500, description = "Storage failure", body = Problem)
    )
)]
pub async fn list_public_members(
    service: Arc<Service>,
    Query(query): Query<PublicListQuery>,
) -> Result<Json<PublicMemberListResponse>, Problem> {
    debug!("Listing public members with query: {:?}", query);

    let page = service
        .list_public(query.page_request(), query.filter())
        .await?;

    Ok(Json(page.into()))
}

/// Public profile of one member
#[utoipa::path(
    get,
    path = "/members/public/{id_number}",
    tag = "members",
    params(("id_number" = String, Path, description = "Member ID number; slashes may be sent raw or percent-encoded")),
    responses(
        (status = 200, description = "Public profile", body = PublicProfileDto),
        (status = 404, description = "No such member", body = Problem)
    )
)]
pub async fn get_public_member(
    service: Arc<Service>,
    Path(id_number): Path<String>,
) -> Result<Json<PublicProfileDto>, Problem> {
    let profile = service.get_public(&id_number).await?;

    Ok(Json(profile.into()))
}

// ===== Authentication =====

/// Exchange the admin password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid password", body = Problem)
    )
)]
pub async fn login(
    service: Arc<Service>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Problem> {
    let session = service.login(&req.password).await?;

    Ok(Json(session.into()))
}

// ===== Admin =====

/// Full roster with filters
#[utoipa::path(
    get,
    path = "/admin/members",
    tag = "admin",
    params(AdminListQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of members", body = AdminMemberListResponse),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 500, description = "Storage failure", body = Problem)
    )
)]
pub async fn list_admin_members(
    service: Arc<Service>,
    headers: HeaderMap,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<AdminMemberListResponse>, Problem> {
    let credential = bearer_credential(&headers)?;
    debug!("Listing roster with query: {:?}", query);

    let page = service
        .list_admin(&credential, query.page_request(), query.filter())
        .await?;

    Ok(Json(page.into()))
}

/// Distinct departments on record
#[utoipa::path(
    get,
    path = "/admin/departments",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Department names", body = Vec<String>),
        (status = 401, description = "Missing or invalid token", body = Problem)
    )
)]
pub async fn list_departments(
    service: Arc<Service>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, Problem> {
    let credential = bearer_credential(&headers)?;
    let departments = service.distinct_departments(&credential).await?;

    Ok(Json(departments))
}

/// Distinct states of origin on record
#[utoipa::path(
    get,
    path = "/admin/states",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "State names", body = Vec<String>),
        (status = 401, description = "Missing or invalid token", body = Problem)
    )
)]
pub async fn list_states(
    service: Arc<Service>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, Problem> {
    let credential = bearer_credential(&headers)?;
    let states = service.distinct_states(&credential).await?;

    Ok(Json(states))
}

/// Download the roster as a spreadsheet
#[utoipa::path(
    get,
    path = "/members/export",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "XLSX workbook", body = Vec<u8>, content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 500, description = "Export failure", body = Problem)
    )
)]
pub async fn export_members(
    service: Arc<Service>,
    headers: HeaderMap,
) -> Result<Response, Problem> {
    let credential = bearer_credential(&headers)?;
    let export = service.export_roster(&credential).await?;

    info!("Serving roster export {}", export.file_name);
    let disposition = format!("attachment; filename=\"{}\"", export.file_name);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, RosterExport::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    )
        .into_response())
}

// ===== Health =====

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
