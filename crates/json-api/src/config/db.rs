//! Database Config

use clap::{ArgAction, Args};

use catalog_app::context::DatabaseOptions;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// Apply pending migrations on startup
    #[arg(
        long,
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub database_run_migrations: bool,
}

impl From<&DatabaseConfig> for DatabaseOptions {
    fn from(config: &DatabaseConfig) -> Self {
        DatabaseOptions {
            url: config.database_url.clone(),
            max_connections: config.database_max_connections,
            run_migrations: config.database_run_migrations,
        }
    }
}
