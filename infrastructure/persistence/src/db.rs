use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::{path::Path, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_url")]
    InvalidUrl(#[source] sqlx::Error),
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError(String),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a configuration from a `postgres://` connection string with default pool values
    pub fn from_url(connection_string: &str) -> Result<Self, DatabaseError> {
        let connect_options =
            PgConnectOptions::from_str(connection_string).map_err(DatabaseError::InvalidUrl)?;
        Ok(Self::new(connect_options))
    }

    /// Creates a configuration from discrete credentials with default pool values
    pub fn from_credentials(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        database: &str,
    ) -> Self {
        Self::new(
            PgConnectOptions::new()
                .host(host)
                .port(port)
                .username(username)
                .password(password)
                .database(database),
        )
    }

    fn new(connect_options: PgConnectOptions) -> Self {
        Self {
            connect_options,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, acquire_timeout: Duration) -> Self {
        self.acquire_timeout = acquire_timeout;
        self
    }
}

/// Creates a PostgreSQL connection pool.
///
/// The pool connects lazily, so this never fails; use [`verify_connection`]
/// to find out whether the database is actually reachable.
pub fn create_postgres_pool(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.connect_options.clone())
}

/// Checks out a connection and runs a trivial query against it
pub async fn verify_connection(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!("Database connection established");
    Ok(())
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    // Checks that the migrations directory exists
    if !path.exists() {
        return Err(DatabaseError::MigrationError(format!(
            "migrations directory not found: {}",
            migrations_path
        )));
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    tracing::info!(path = migrations_path, "Database schema is up to date");
    Ok(())
}

/// Closes every pooled connection and waits for checked-out ones to return
pub async fn close(pool: &PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
