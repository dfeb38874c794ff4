//! Problem Details (RFC 9457) responses for member directory errors

use crate::contract::MemberError;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Error body returned by every failing member directory route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// Problem kind, e.g. `urn:fellowship:problem:validation`
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    /// Caller-facing message; absent for opaque failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Offending registration field (wire name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Problem {
    fn of(status: StatusCode, kind: &str, title: &str) -> Self {
        Self {
            kind: format!("urn:fellowship:problem:{}", kind),
            title: title.to_string(),
            status: status.as_u16(),
            detail: None,
            field: None,
        }
    }

    fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}

impl From<MemberError> for Problem {
    fn from(error: MemberError) -> Self {
        map_domain_error(error)
    }
}

/// Body extraction failures; serde's message stays in the log
impl From<JsonRejection> for Problem {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Problem::of(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported-media-type",
                "Unsupported media type",
            )
            .detail("Expected Content-Type: application/json"),
            _ => Problem::of(StatusCode::BAD_REQUEST, "malformed-body", "Malformed request body")
                .detail("Request body must be a JSON object"),
        }
    }
}

/// Map member directory errors onto HTTP problems.
///
/// Storage failures never leak their cause.
pub fn map_domain_error(error: MemberError) -> Problem {
    match error {
        MemberError::Validation { field, message } => Problem {
            field: Some(field),
            ..Problem::of(StatusCode::BAD_REQUEST, "validation", "Invalid registration")
                .detail(message)
        },
        MemberError::NotFound { .. } => {
            Problem::of(StatusCode::NOT_FOUND, "not-found", "Member not found")
        }
        MemberError::DuplicateIdNumber { .. } => {
            Problem::of(StatusCode::CONFLICT, "duplicate-id-number", "Duplicate ID number")
                .detail("ID number already exists")
        }
        MemberError::Unauthorized => {
            Problem::of(StatusCode::UNAUTHORIZED, "unauthorized", "Admin token required")
        }
        MemberError::InvalidCredentials => {
            Problem::of(StatusCode::UNAUTHORIZED, "invalid-credentials", "Login failed")
                .detail("Invalid password")
        }
        MemberError::Internal => {
            Problem::of(StatusCode::INTERNAL_SERVER_ERROR, "internal", "Server error")
                .detail("An unexpected error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_problem_names_the_field() {
        let problem = map_domain_error(MemberError::missing_field("fullName"));

        assert_eq!(problem.status, 400);
        assert_eq!(problem.kind, "urn:fellowship:problem:validation");
        assert_eq!(problem.field.as_deref(), Some("fullName"));
        assert_eq!(problem.detail.as_deref(), Some("Missing required field: fullName"));
    }

    #[test]
    fn internal_problem_is_opaque() {
        let problem = map_domain_error(MemberError::Internal);

        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail.as_deref(), Some("An unexpected error occurred"));
        assert!(problem.field.is_none());
    }

    #[test]
    fn not_found_has_no_detail() {
        let problem = map_domain_error(MemberError::NotFound {
            id_number: "22/05/04/0011".into(),
        });

        assert_eq!(problem.status_code(), StatusCode::NOT_FOUND);
        assert!(problem.detail.is_none());
    }

    #[tokio::test]
    async fn unreadable_body_is_a_bad_request() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        let request = Request::post("/members")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();
        let problem = Problem::from(rejection);

        assert_eq!(problem.status, 400);
        assert_eq!(problem.kind, "urn:fellowship:problem:malformed-body");
        assert_eq!(problem.detail.as_deref(), Some("Request body must be a JSON object"));
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        let request = Request::post("/auth/login")
            .body(Body::from(r#"{"password":"x"}"#))
            .unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(Problem::from(rejection).status, 415);
    }

    #[test]
    fn response_uses_problem_content_type() {
        let response = map_domain_error(MemberError::Unauthorized).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            PROBLEM_CONTENT_TYPE
        );
    }
}
