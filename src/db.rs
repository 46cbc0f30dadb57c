//! Shared database handle. Built once at startup and passed to every store through `AppState`;
//! the pool inside is created on first use and reused for the life of the process.

use crate::config::DatabaseConfig;
use crate::error::StoreError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

struct DatabaseInner {
    url: String,
    max_connections: u32,
    pool: OnceCell<PgPool>,
}

impl Database {
    pub fn new(config: &DatabaseConfig) -> Self {
        Database {
            inner: Arc::new(DatabaseInner {
                url: config.url.clone(),
                max_connections: config.max_connections,
                pool: OnceCell::new(),
            }),
        }
    }

    /// The process-wide pool. Every call on this handle or its clones returns the same pool.
    /// Connections are opened lazily by the pool, so this never waits on the network.
    pub async fn pool(&self) -> Result<&PgPool, StoreError> {
        self.inner
            .pool
            .get_or_try_init(|| async {
                let options = PgConnectOptions::from_str(&self.inner.url)?;
                tracing::info!(max_connections = self.inner.max_connections, "creating database pool");
                Ok::<_, StoreError>(
                    PgPoolOptions::new()
                        .max_connections(self.inner.max_connections)
                        .connect_lazy_with(options),
                )
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.pool.initialized()
    }
}
