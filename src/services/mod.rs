pub mod auth_service;
pub use auth_service::{AuthError, AuthService, Claims, Identity, LoginResult};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod inventory_service;
pub use inventory_service::{BulkInsertReport, InventoryError, InventoryService};

pub mod inventory_service_impl;
pub use inventory_service_impl::SeaOrmInventoryService;
