//! Shared application state passed to route constructors.

use sea_orm::DatabaseConnection;

/// Cloned per router; the connection is a shared pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SeaORM connection pool (SQLite or PostgreSQL)
    pub db: DatabaseConnection,
}
