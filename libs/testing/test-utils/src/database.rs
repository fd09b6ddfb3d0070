//! Migrated test databases.

use database::sql::{DatabaseConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Test database with the `items` schema applied
///
/// [`TestDatabase::new`] is an in-memory SQLite database private to the
/// calling test. With the `postgres` feature, [`TestDatabase::postgres`]
/// starts a throwaway PostgreSQL container instead; the container is
/// removed when this value is dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    pub connection_string: String,
    #[cfg(feature = "postgres")]
    pub(crate) _container: Option<
        testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>,
    >,
}

impl TestDatabase {
    /// In-memory SQLite with migrations applied.
    ///
    /// The pool is pinned to one connection: every SQLite `:memory:`
    /// connection is its own database.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection_string = "sqlite::memory:".to_string();
        let config = DatabaseConfig::new(connection_string.clone()).with_pool_size(1, 1);
        let connection = Self::migrated(config).await;

        Self {
            connection,
            connection_string,
            #[cfg(feature = "postgres")]
            _container: None,
        }
    }

    pub(crate) async fn migrated(config: DatabaseConfig) -> DatabaseConnection {
        let connection = connect_from_config(config)
            .await
            .expect("Failed to connect to test database");

        run_migrations::<Migrator>(&connection, "test")
            .await
            .expect("Failed to run migrations on test database");

        connection
    }

    /// Cloned handle for building repositories and services
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        tracing::debug!(url = %self.connection_string, "Dropping test database");
    }
}
