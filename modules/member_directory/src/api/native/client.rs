//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    AdminCredential, AdminSession, Member, MemberDirectoryApi, MemberError, MemberFilter,
    NewMember, Page, PageRequest, PublicMember, PublicProfile, RosterExport,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MemberDirectoryApi for NativeClient {
    async fn register(&self, input: NewMember) -> Result<Member, MemberError> {
        self.service.register(input).await
    }

    async fn list_public(
        &self,
        page: PageRequest,
        filter: MemberFilter,
    ) -> Result<Page<PublicMember>, MemberError> {
        self.service.list_public(page, filter).await
    }

    async fn get_public(&self, id_number: &str) -> Result<PublicProfile, MemberError> {
        self.service.get_public(id_number).await
    }

    async fn login(&self, password: &str) -> Result<AdminSession, MemberError> {
        self.service.login(password).await
    }

    async fn list_admin(
        &self,
        credential: &AdminCredential,
        page: PageRequest,
        filter: MemberFilter,
    ) -> Result<Page<Member>, MemberError> {
        self.service.list_admin(credential, page, filter).await
    }

    async fn distinct_departments(
        &self,
        credential: &AdminCredential,
    ) -> Result<Vec<String>, MemberError> {
        self.service.distinct_departments(credential).await
    }

    async fn distinct_states(
        &self,
        credential: &AdminCredential,
    ) -> Result<Vec<String>, MemberError> {
        self.service.distinct_states(credential).await
    }

    async fn export_roster(
        &self,
        credential: &AdminCredential,
    ) -> Result<RosterExport, MemberError> {
        self.service.export_roster(credential).await
    }
}
