//! Module declaration and lifecycle

use crate::config::Config;
use crate::contract::MemberDirectoryApi;
use crate::domain::{AuthGate, Service, ServiceConfig};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Member directory module
pub struct MemberDirectoryModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for MemberDirectoryModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl MemberDirectoryModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Wire repository, auth gate and domain service over `db`
    pub async fn init(&self, db: DatabaseConnection) -> Result<()> {
        let cfg = self.config.read().clone();

        let repo = Arc::new(crate::infra::storage::SeaOrmMemberRepository::new(Arc::new(db)));
        let auth = AuthGate::from_config(&cfg)?;

        let service = Arc::new(Service::new(repo, auth, ServiceConfig::from(cfg)));
        *self.service.write() = Some(service);

        tracing::info!("Member directory initialized");
        Ok(())
    }

    /// Apply pending migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Member directory migrations completed");
        Ok(())
    }

    /// Initialized domain service
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client over the initialized service
    pub fn client(&self) -> Result<Arc<dyn MemberDirectoryApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering member directory REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }
}
