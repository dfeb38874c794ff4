//! OpenAPI document for the REST surface

use super::{dto::*, error::Problem, handlers};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Fellowship Member Directory"),
    paths(
        handlers::register_member,
        handlers::list_public_members,
        handlers::get_public_member,
        handlers::login,
        handlers::list_admin_members,
        handlers::list_departments,
        handlers::list_states,
        handlers::export_members,
        handlers::health,
    ),
    components(schemas(
        MemberDto,
        RegisterMemberRequest,
        RegisterMemberResponse,
        PublicMemberDto,
        PublicProfileDto,
        PaginationDto,
        PublicMemberListResponse,
        AdminMemberListResponse,
        LoginRequest,
        LoginResponse,
        SessionUserDto,
        HealthResponse,
        Problem,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "members", description = "Registration and public directory"),
        (name = "auth", description = "Admin sign-in"),
        (name = "admin", description = "Admin roster, requires a bearer token"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/members",
            "/members/public",
            "/members/public/{id_number}",
            "/members/export",
            "/admin/members",
            "/admin/departments",
            "/admin/states",
            "/auth/login",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
