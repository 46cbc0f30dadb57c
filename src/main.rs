//! Server entry point: load config, build shared clients once, serve the router.

use hotel_portal::{
    bootstrap, build_router, storage, AppConfig, AppState, BaasClient, Database, HotelStore, MemoryStore, PgStore,
    StoreBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hotel_portal=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn HotelStore> = match config.store {
        StoreBackend::Postgres => {
            if config.bootstrap {
                bootstrap::ensure_database_exists(&config.database.url).await?;
            }
            let db = Database::new(&config.database);
            if config.bootstrap {
                bootstrap::ensure_schema(db.pool().await?).await?;
            }
            Arc::new(PgStore::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory demo store");
            Arc::new(MemoryStore::demo())
        }
    };

    let mut state = AppState::new(store, config.clone());
    if config.baas.url.is_some() {
        // A configured project without its service key is a deployment error.
        state = state.with_baas(BaasClient::service_role(&config.baas)?);
    }
    if config.storage.is_configured() {
        state = state.with_storage(storage::build_client(&config.storage).await?);
    }

    let app = build_router(state);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
