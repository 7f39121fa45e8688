use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::auth_service_impl::generate_secret;
use crate::services::{AuthService, InventoryService, SeaOrmAuthService, SeaOrmInventoryService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub inventory_service: Arc<dyn InventoryService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let secret = config.security.jwt_secret.clone().unwrap_or_else(|| {
            tracing::warn!(
                "No JWT secret configured (security.jwt_secret or SECRET_KEY); \
                 using a random one, tokens will not survive a restart"
            );
            generate_secret()
        });

        let auth_service = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
            secret.as_bytes(),
        ));

        let inventory_service = Arc::new(SeaOrmInventoryService::new(
            store.clone(),
            config.inventory.low_stock_threshold,
        ));

        Self {
            config: Arc::new(config),
            store,
            auth_service,
            inventory_service,
        }
    }
}
