use crate::config::SecurityConfig;
use crate::domain::{ItemId, ListQuery, Role};
use crate::models::{InventoryItem, ItemDraft};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::user::User;

/// Owned handle to the connection pool. Cheap to clone.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn inventory_repo(&self) -> repositories::inventory::InventoryRepository {
        repositories::inventory::InventoryRepository::new(self.conn.clone())
    }

    pub fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn list_items(&self, query: &ListQuery) -> Result<(Vec<InventoryItem>, u64)> {
        self.inventory_repo().list(query).await
    }

    pub async fn get_item(&self, id: ItemId) -> Result<Option<InventoryItem>> {
        self.inventory_repo().get(id).await
    }

    pub async fn add_item(&self, draft: &ItemDraft) -> Result<InventoryItem> {
        self.inventory_repo().create(draft).await
    }

    pub async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<bool> {
        self.inventory_repo().update(id, draft).await
    }

    pub async fn remove_item(&self, id: ItemId) -> Result<bool> {
        self.inventory_repo().remove(id).await
    }

    pub async fn add_items_batch(&self, drafts: &[ItemDraft]) -> Result<u64> {
        self.inventory_repo().insert_batch(drafts).await
    }

    pub async fn low_stock_items(&self, threshold: i32) -> Result<Vec<InventoryItem>> {
        self.inventory_repo().below_quantity(threshold).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
        security: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo()
            .create(username, password, role, security)
            .await
    }
}
