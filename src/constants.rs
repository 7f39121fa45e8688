pub mod inventory {

    pub const LOW_STOCK_THRESHOLD: i32 = 5;

    pub const DEFAULT_PAGE_SIZE: u64 = 5;

    pub const MAX_PAGE_SIZE: u64 = 100;
}

pub mod auth {

    /// Account seeded by the initial migration.
    pub const BOOTSTRAP_USERNAME: &str = "admin";

    pub const BOOTSTRAP_PASSWORD: &str = "admin123";
}
