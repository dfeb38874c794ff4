//! Configuration for member directory module

use serde::{Deserialize, Serialize};

/// Member directory configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Shared admin secret in plain text
    #[serde(default)]
    pub admin_password: Option<String>,

    /// Hex-encoded SHA-256 of the admin secret; wins over `admin_password`
    #[serde(default)]
    pub admin_password_sha256: Option<String>,

    /// HMAC secret used to sign admin tokens; required
    #[serde(default)]
    pub jwt_secret: Option<String>,

    /// `iss` claim of issued tokens
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,

    /// Token validity window in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u32,

    /// Organisation name used in the export file name
    #[serde(default = "default_org_name")]
    pub org_name: String,

    /// Page size when the caller does not send `limit`
    #[serde(default = "default_page_limit")]
    pub default_page_limit: u32,

    /// Upper bound for `limit`
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: u32,

    /// Reject registrations whose ID number is already stored
    #[serde(default = "default_true")]
    pub enforce_unique_id_number: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_password: None,
            admin_password_sha256: None,
            jwt_secret: None,
            jwt_issuer: default_jwt_issuer(),
            token_ttl_hours: default_token_ttl_hours(),
            org_name: default_org_name(),
            default_page_limit: default_page_limit(),
            max_page_limit: default_max_page_limit(),
            enforce_unique_id_number: true,
        }
    }
}

fn default_jwt_issuer() -> String {
    "fellowship-directory".to_string()
}

fn default_token_ttl_hours() -> u32 {
    24
}

fn default_org_name() -> String {
    "concess".to_string()
}

fn default_page_limit() -> u32 {
    10
}

fn default_max_page_limit() -> u32 {
    100
}

fn default_true() -> bool {
    true
}
