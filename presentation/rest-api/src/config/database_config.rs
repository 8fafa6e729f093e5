use std::env;
use std::time::Duration;

use persistence::db::{
    DatabaseConfig, DatabaseError, close, create_postgres_pool, run_migrations, verify_connection,
};
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    Missing(&'static str),
    #[error("config.invalid_variable: {0}")]
    Invalid(&'static str),
}

/// Everything needed to open and prepare the product storage
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub config: DatabaseConfig,
    pub migrations_path: String,
    /// When true, an unreachable database aborts startup instead of being logged
    pub required: bool,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string. When absent, the discrete
    ///   DB_HOST (default "localhost"), DB_PORT (default 5432), DB_USER,
    ///   DB_PASSWORD and DB_NAME are used instead.
    /// - DB_MAX_CONNECTIONS: pool size (default 5)
    /// - DB_ACQUIRE_TIMEOUT_SECS: connection checkout timeout (default 30)
    /// - MIGRATIONS_PATH: migrations directory (default "./migrations")
    /// - DATABASE_REQUIRED: refuse to start without storage (default false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("DATABASE_URL") {
            Some(url) => {
                DatabaseConfig::from_url(&url).map_err(|_| ConfigError::Invalid("DATABASE_URL"))?
            }
            None => {
                let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
                let port = parse_or("DB_PORT", &lookup, 5432u16)?;
                let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let password = lookup("DB_PASSWORD").ok_or(ConfigError::Missing("DB_PASSWORD"))?;
                let name = lookup("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
                DatabaseConfig::from_credentials(&host, port, &user, &password, &name)
            }
        };

        if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
            let max = max
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid("DB_MAX_CONNECTIONS"))?;
            config = config.with_max_connections(max);
        }
        if let Some(secs) = lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("DB_ACQUIRE_TIMEOUT_SECS"))?;
            config = config.with_acquire_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            config,
            migrations_path: lookup("MIGRATIONS_PATH").unwrap_or_else(|| "./migrations".to_string()),
            required: parse_or("DATABASE_REQUIRED", &lookup, false)?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

/// Opens the storage pool, checks connectivity and brings the schema up to date.
///
/// Connectivity or migration failures are logged and startup continues with a
/// lazily connecting pool, unless `settings.required` is set.
pub async fn initialize(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.config);

    if let Err(err) = prepare(&pool, &settings.migrations_path).await {
        if settings.required {
            return Err(anyhow::Error::new(err).context("database is required but unavailable"));
        }
        tracing::error!(error = ?err, "Could not prepare the database, continuing without it");
    }

    Ok(pool)
}

async fn prepare(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    verify_connection(pool).await?;
    run_migrations(pool, migrations_path).await
}

/// Closes the storage pool once the HTTP server has stopped
pub async fn shutdown(pool: &PgPool) {
    close(pool).await;
}
