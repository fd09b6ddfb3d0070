//! SeaORM connector, migrations runner and health probe.
//!
//! Works against any sqlx backend enabled on `sea-orm`; the workspace
//! enables SQLite and PostgreSQL.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, DatabaseConfig};
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
