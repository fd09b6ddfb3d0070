use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sql::DatabaseConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // DATABASE_URL falls back to a local SQLite file
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8000

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
