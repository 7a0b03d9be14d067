pub mod catalog;
pub mod manager;
pub mod migrations;
pub mod models;
pub mod postgres;
pub mod seed;
pub mod storage;

pub use catalog::Catalog;
pub use manager::{DatabaseError, DatabaseManager};
pub use postgres::PgStorage;
pub use storage::Storage;
