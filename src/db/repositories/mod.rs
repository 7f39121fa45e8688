pub mod inventory;
pub mod user;
