//! Route registration

use crate::domain::Service;
use super::{dto::*, error::Problem, handlers, openapi::ApiDoc};
use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    http::{HeaderMap, StatusCode},
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Registration and public directory
        .route("/members", post(register_member_handler))
        .route("/members/public", get(list_public_members_handler))
        .route("/members/public/{*id_number}", get(get_public_member_handler))
        .route("/members/export", get(export_members_handler))
        // Auth
        .route("/auth/login", post(login_handler))
        // Admin roster
        .route("/admin/members", get(list_admin_members_handler))
        .route("/admin/departments", get(list_departments_handler))
        .route("/admin/states", get(list_states_handler))
        // Service endpoints
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn register_member_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<RegisterMemberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterMemberResponse>), Problem> {
    handlers::register_member(service, json?).await
}

async fn list_public_members_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<PublicListQuery>,
) -> Result<Json<PublicMemberListResponse>, Problem> {
    handlers::list_public_members(service, query).await
}

async fn get_public_member_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<PublicProfileDto>, Problem> {
    handlers::get_public_member(service, path).await
}

async fn export_members_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Result<Response, Problem> {
    handlers::export_members(service, headers).await
}

async fn login_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, Problem> {
    handlers::login(service, json?).await
}

async fn list_admin_members_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    query: Query<AdminListQuery>,
) -> Result<Json<AdminMemberListResponse>, Problem> {
    handlers::list_admin_members(service, headers, query).await
}

async fn list_departments_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, Problem> {
    handlers::list_departments(service, headers).await
}

async fn list_states_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, Problem> {
    handlers::list_states(service, headers).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
