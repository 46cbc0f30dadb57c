//! Hotel portal: admin panel API and guest portal routing over PostgreSQL.

pub mod baas;
pub mod bootstrap;
pub mod case;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod storage;
pub mod store;

pub use baas::BaasClient;
pub use config::{AppConfig, StoreBackend};
pub use db::Database;
pub use error::{AppError, BaasError, BootstrapError, ConfigError, StoreError};
pub use routes::build_router;
pub use state::AppState;
pub use store::{HotelStore, MemoryStore, PgStore};
