//! Database lifecycle: open the SQLite store, run migrations, close it.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::{config::DatabaseConfig, error::AppResult};

/// Handle to the opened store.
///
/// Created once at startup and handed by reference to whatever needs a pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database described by `config` and bring
    /// its schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database {}", config.url);

        Self::migrate(pool).await
    }

    /// Private in-memory store, gone once the handle is closed or dropped.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // Every connection to `:memory:` is its own database: keep exactly one
        // and never recycle it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> AppResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("Database migrations completed");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for in-flight statements and close every connection.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Database closed");
    }
}
