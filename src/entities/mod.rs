pub mod prelude;

pub mod inventory;
pub mod users;
