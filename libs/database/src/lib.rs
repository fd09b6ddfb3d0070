//! Relational database plumbing shared by the domain crates.
//!
//! # Features
//!
//! - `sql` (default) - SeaORM connector, health check and [`BaseRepository`]
//! - `config` - `core_config::FromEnv` for [`sql::DatabaseConfig`]
//!
//! The connector accepts any URL sqlx understands; the services in this
//! workspace use `sqlite://` for local runs and `postgres://` in deployment.
//!
//! ```ignore
//! use database::sql;
//! use migration::Migrator;
//!
//! let config = sql::DatabaseConfig::new("sqlite://items.db?mode=rwc");
//! let db = sql::connect_from_config_with_retry(config, None).await?;
//! sql::run_migrations::<Migrator>(&db, "items-api").await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod repository;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "sql")]
pub use repository::BaseRepository;
