//! Database module for PostgreSQL connection handling and row types.

mod connection;
mod schema;

pub use connection::{Database, DbError};
pub use schema::*;
