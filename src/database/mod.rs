pub mod archive;
pub mod connection;
pub mod entries;
pub mod models;
pub mod setup;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
