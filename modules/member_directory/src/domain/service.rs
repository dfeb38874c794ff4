//! Domain service - business logic orchestration

use crate::config::Config;
use crate::contract::{
    AdminCredential, AdminSession, Member, MemberError, MemberFilter, NewMember, Page,
    PageRequest, Pagination, PublicMember, PublicProfile, RosterExport, ADMIN_ROLE,
};
use super::auth::AuthGate;
use super::export::{build_roster_workbook, export_file_name};
use super::repository::{MemberField, MemberRepository};
use super::validation::validate_registration;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Tunables the service needs from module configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_limit: u32,
    pub max_page_limit: u32,
    pub enforce_unique_id_number: bool,
    pub org_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Config::default().into()
    }
}

impl From<Config> for ServiceConfig {
    fn from(cfg: Config) -> Self {
        Self {
            default_page_limit: cfg.default_page_limit.max(1),
            max_page_limit: cfg.max_page_limit.max(1),
            enforce_unique_id_number: cfg.enforce_unique_id_number,
            org_name: cfg.org_name,
        }
    }
}

/// Domain service for the member directory
pub struct Service {
    repo: Arc<dyn MemberRepository>,
    auth: AuthGate,
    config: ServiceConfig,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn MemberRepository>, auth: AuthGate, config: ServiceConfig) -> Self {
        Self { repo, auth, config }
    }

    // ===== Registration =====

    /// Validate and store a new member
    pub async fn register(&self, input: NewMember) -> Result<Member, MemberError> {
        let record = validate_registration(&input, Utc::now())?;

        if self.config.enforce_unique_id_number {
            let existing = self
                .repo
                .find_by_id_number(&record.id_number)
                .await
                .map_err(|e| internal("check duplicate id number", e))?;
            if existing.is_some() {
                warn!("Rejected duplicate registration for {}", record.id_number);
                return Err(MemberError::DuplicateIdNumber {
                    id_number: record.id_number,
                });
            }
        }

        let member = self
            .repo
            .insert(&record)
            .await
            .map_err(|e| internal("create member", e))?;

        info!("Registered member {} ({})", member.id_number, member.id);
        Ok(member)
    }

    // ===== Public directory =====

    /// Redacted directory listing; the state-of-origin filter is not offered here
    pub async fn list_public(
        &self,
        page: PageRequest,
        filter: MemberFilter,
    ) -> Result<Page<PublicMember>, MemberError> {
        let filter = MemberFilter {
            state_of_origin: None,
            ..filter
        };
        let page = self.fetch_page(page, &filter).await?;

        Ok(Page {
            items: page.items.into_iter().map(PublicMember::from).collect(),
            pagination: page.pagination,
        })
    }

    /// Public profile of one member
    pub async fn get_public(&self, id_number: &str) -> Result<PublicProfile, MemberError> {
        self.repo
            .find_by_id_number(id_number)
            .await
            .map_err(|e| internal("fetch member", e))?
            .map(PublicProfile::from)
            .ok_or_else(|| MemberError::NotFound {
                id_number: id_number.to_string(),
            })
    }

    // ===== Authentication =====

    /// Exchange the shared admin secret for a token
    pub async fn login(&self, password: &str) -> Result<AdminSession, MemberError> {
        if !self.auth.check_password(password) {
            warn!("Admin login rejected");
            return Err(MemberError::InvalidCredentials);
        }

        let token = self
            .auth
            .issue_token()
            .map_err(|e| internal("issue admin token", e))?;

        info!("Admin token issued");
        Ok(AdminSession {
            token,
            role: ADMIN_ROLE.to_string(),
        })
    }

    /// Reject the call unless the credential carries a valid admin token
    pub fn authorize(&self, credential: &AdminCredential) -> Result<(), MemberError> {
        if self.auth.verify(credential.token()) {
            Ok(())
        } else {
            Err(MemberError::Unauthorized)
        }
    }

    // ===== Admin roster =====

    /// Full roster listing with name, department and state filters
    pub async fn list_admin(
        &self,
        credential: &AdminCredential,
        page: PageRequest,
        filter: MemberFilter,
    ) -> Result<Page<Member>, MemberError> {
        self.authorize(credential)?;
        self.fetch_page(page, &filter).await
    }

    pub async fn distinct_departments(
        &self,
        credential: &AdminCredential,
    ) -> Result<Vec<String>, MemberError> {
        self.authorize(credential)?;
        self.repo
            .distinct(MemberField::Department)
            .await
            .map_err(|e| internal("fetch departments", e))
    }

    pub async fn distinct_states(
        &self,
        credential: &AdminCredential,
    ) -> Result<Vec<String>, MemberError> {
        self.authorize(credential)?;
        self.repo
            .distinct(MemberField::StateOfOrigin)
            .await
            .map_err(|e| internal("fetch states of origin", e))
    }

    /// Whole roster as an XLSX workbook
    pub async fn export_roster(
        &self,
        credential: &AdminCredential,
    ) -> Result<RosterExport, MemberError> {
        self.authorize(credential)?;

        let members = self
            .repo
            .list_all()
            .await
            .map_err(|e| internal("load members for export", e))?;
        let bytes =
            build_roster_workbook(&members).map_err(|e| internal("build export workbook", e))?;

        info!("Exported {} members", members.len());
        Ok(RosterExport {
            file_name: export_file_name(&self.config.org_name, Utc::now().date_naive()),
            bytes,
        })
    }

    // ===== Helpers =====

    /// Apply defaults and bounds to a page request.
    ///
    /// Non-positive values fall back to the defaults; `limit` is capped at
    /// `max_page_limit`.
    pub fn resolve_page(&self, request: PageRequest) -> (u32, u32) {
        let page = request.page.filter(|p| *p > 0).unwrap_or(1);
        let limit = request
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(self.config.default_page_limit)
            .min(self.config.max_page_limit);
        (page, limit)
    }

    async fn fetch_page(
        &self,
        request: PageRequest,
        filter: &MemberFilter,
    ) -> Result<Page<Member>, MemberError> {
        let (page, limit) = self.resolve_page(request);

        let total = self
            .repo
            .count(filter)
            .await
            .map_err(|e| internal("count members", e))?;
        let pagination = Pagination::new(page, limit, total);

        let items = self
            .repo
            .find(filter, pagination.skip(), u64::from(limit))
            .await
            .map_err(|e| internal("fetch members", e))?;

        debug!(
            "Fetched page {}/{} ({} of {} members)",
            page,
            pagination.pages,
            items.len(),
            total
        );
        Ok(Page { items, pagination })
    }
}

/// Log a store failure and hide it behind an opaque error
fn internal(action: &str, error: anyhow::Error) -> MemberError {
    error!("Failed to {}: {:?}", action, error);
    MemberError::Internal
}
