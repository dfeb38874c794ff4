//! Common test utilities: in-memory repository, fixtures and builders

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Duration;
use member_directory::contract::{Member, MemberFilter, NewMember};
use member_directory::domain::{
    AuthGate, MemberField, MemberRepository, NewMemberRecord, Service, ServiceConfig,
};
use member_directory::{Config, MemberDirectoryModule};
use parking_lot::RwLock;
use std::sync::Arc;

pub const ADMIN_PASSWORD: &str = "iamanadmin";
pub const JWT_SECRET: &str = "test-jwt-secret";

pub fn test_config() -> Config {
    Config {
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        jwt_secret: Some(JWT_SECRET.to_string()),
        ..Config::default()
    }
}

// ===== Fixtures =====

pub fn jane_doe() -> NewMember {
    NewMember {
        id_number: "22/05/04/0011".into(),
        full_name: "Jane Doe".into(),
        phone_number: "08031234567".into(),
        email: "jane.doe@example.com".into(),
        department: "Mechanical Engineering".into(),
        date_of_birth: "1999-07-04".into(),
        state_of_origin: "Lagos".into(),
        interests: "Robotics, renewable energy".into(),
        hobbies: "Chess".into(),
        best_engineering_quote: "Engineering is the art of the possible".into(),
    }
}

/// Distinct member `n` with the given name, department and state
pub fn member_input(n: usize, full_name: &str, department: &str, state: &str) -> NewMember {
    NewMember {
        id_number: format!("22/05/04/{:04}", n),
        full_name: full_name.into(),
        phone_number: format!("0803000{:04}", n),
        email: format!("member{}@example.com", n),
        department: department.into(),
        date_of_birth: "2000-03-15".into(),
        state_of_origin: state.into(),
        interests: "Design".into(),
        hobbies: "Football".into(),
        best_engineering_quote: "Keep it simple".into(),
    }
}

/// A spread of names exercising case-insensitive search
pub fn roster() -> Vec<NewMember> {
    vec![
        member_input(1, "Ann Smith", "Civil Engineering", "Lagos"),
        member_input(2, "Joanna Okafor", "Electrical Engineering", "Enugu"),
        member_input(3, "HANNAH Bello", "Civil Engineering", "Kano"),
        member_input(4, "Peter Obi", "Mechanical Engineering", "Anambra"),
        member_input(5, "Chidi Eze", "Civil Engineering", "Enugu"),
        member_input(6, "Suzanne Adeyemi", "Chemical Engineering", "Oyo"),
        member_input(7, "Tunde Bakare", "Mechanical Engineering", "Lagos"),
    ]
}

// ===== Mock repository =====

#[derive(Clone, Default)]
pub struct MockMemberRepo {
    data: Arc<RwLock<Vec<Member>>>,
}

impl MockMemberRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_all(&self) -> usize {
        self.data.read().len()
    }

    fn matches(filter: &MemberFilter, member: &Member) -> bool {
        filter.search.as_ref().map_or(true, |s| {
            member.full_name.to_lowercase().contains(&s.to_lowercase())
        }) && filter
            .department
            .as_ref()
            .map_or(true, |d| &member.department == d)
            && filter
                .state_of_origin
                .as_ref()
                .map_or(true, |s| &member.state_of_origin == s)
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepo {
    async fn insert(&self, record: &NewMemberRecord) -> anyhow::Result<Member> {
        let mut data = self.data.write();
        let member = Member {
            id: data.len() as i32 + 1,
            id_number: record.id_number.clone(),
            full_name: record.full_name.clone(),
            phone_number: record.phone_number.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
            date_of_birth: record.date_of_birth,
            state_of_origin: record.state_of_origin.clone(),
            interests: record.interests.clone(),
            hobbies: record.hobbies.clone(),
            best_engineering_quote: record.best_engineering_quote.clone(),
            submitted_at: record.submitted_at,
        };
        data.push(member.clone());
        Ok(member)
    }

    async fn count(&self, filter: &MemberFilter) -> anyhow::Result<u64> {
        let data = self.data.read();
        Ok(data.iter().filter(|m| Self::matches(filter, m)).count() as u64)
    }

    async fn find(
        &self,
        filter: &MemberFilter,
        skip: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Member>> {
        let data = self.data.read();
        Ok(data
            .iter()
            .filter(|m| Self::matches(filter, m))
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id_number(&self, id_number: &str) -> anyhow::Result<Option<Member>> {
        let data = self.data.read();
        Ok(data.iter().find(|m| m.id_number == id_number).cloned())
    }

    async fn distinct(&self, field: MemberField) -> anyhow::Result<Vec<String>> {
        let data = self.data.read();
        let mut values: Vec<String> = data
            .iter()
            .map(|m| match field {
                MemberField::Department => m.department.clone(),
                MemberField::StateOfOrigin => m.state_of_origin.clone(),
            })
            .collect();
        values.sort();
        values.dedup();
        Ok(values)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Member>> {
        Ok(self.data.read().clone())
    }
}

/// Repository whose every call fails, for error-surfacing tests
pub struct FailingRepo;

#[async_trait]
impl MemberRepository for FailingRepo {
    async fn insert(&self, _record: &NewMemberRecord) -> anyhow::Result<Member> {
        Err(anyhow::anyhow!("connection refused: db-host:5432"))
    }

    async fn count(&self, _filter: &MemberFilter) -> anyhow::Result<u64> {
        Err(anyhow::anyhow!("connection refused: db-host:5432"))
    }

    async fn find(
        &self,
        _filter: &MemberFilter,
        _skip: u64,
        _limit: u64,
    ) -> anyhow::Result<Vec<Member>> {
        Err(anyhow::anyhow!("connection refused: db-host:5432"))
    }

    async fn find_by_id_number(&self, _id_number: &str) -> anyhow::Result<Option<Member>> {
        Err(anyhow::anyhow!("connection refused: db-host:5432"))
    }

    async fn distinct(&self, _field: MemberField) -> anyhow::Result<Vec<String>> {
        Err(anyhow::anyhow!("connection refused: db-host:5432"))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Member>> {
        Err(anyhow::anyhow!("connection refused: db-host:5432"))
    }
}

// ===== Builders =====

pub fn test_gate() -> AuthGate {
    AuthGate::from_config(&test_config()).expect("valid test config")
}

/// Gate with the right issuer but a foreign signing key
pub fn foreign_gate() -> AuthGate {
    let cfg = test_config();
    AuthGate::new([7u8; 32], "some-other-secret", cfg.jwt_issuer, Duration::hours(24))
}

/// Gate signing with the well-known "secret" key
pub fn default_key_gate() -> AuthGate {
    let cfg = test_config();
    AuthGate::new([7u8; 32], "secret", cfg.jwt_issuer, Duration::hours(24))
}

pub fn create_service_with(repo: Arc<dyn MemberRepository>, config: Config) -> Service {
    let auth = AuthGate::from_config(&config).expect("valid test config");
    Service::new(repo, auth, ServiceConfig::from(config))
}

pub fn create_test_service() -> (Service, MockMemberRepo) {
    let repo = MockMemberRepo::new();
    let service = create_service_with(Arc::new(repo.clone()), test_config());
    (service, repo)
}

/// Module over a fresh in-memory SQLite database, migrated and initialized
pub async fn create_test_module() -> MemberDirectoryModule {
    // One shared connection, or each pool member gets its own empty database
    let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);

    let db = sea_orm::Database::connect(opts)
        .await
        .expect("Failed to connect to test database");

    let module = MemberDirectoryModule::new(test_config());
    module.migrate(&db).await.expect("Failed to run migrations");
    module.init(db).await.expect("Failed to init module");
    module
}

pub async fn create_test_router() -> Router {
    create_test_module()
        .await
        .register_rest(Router::new())
        .expect("Failed to register routes")
}
