//! Application configuration resolved from environment variables. Each setting may be read
//! from a chain of variable names; the first non-empty value wins.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/hotel";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which `HotelStore` implementation the server runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// In-process store seeded with demo data; no database needed.
    Memory,
}

impl StoreBackend {
    pub const fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid {
                key: "HOTEL_PORTAL_STORE",
                message: format!("{} (expected postgres or memory)", s),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// BaaS project credentials. Which fields are required depends on the client built from it.
#[derive(Clone, Debug, Default)]
pub struct BaasConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_role_key: Option<String>,
}

/// S3-compatible object storage settings.
#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Custom endpoint for S3-compatible providers.
    pub endpoint: Option<String>,
    pub force_path_style: bool,
}

impl StorageConfig {
    /// Storage is considered configured once a region is known.
    pub fn is_configured(&self) -> bool {
        self.region.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub store: StoreBackend,
    pub baas: BaasConfig,
    pub storage: StorageConfig,
    /// Mount `/debug/*` routes.
    pub diagnostics: bool,
    /// Create the database and tables at startup when missing.
    pub bootstrap: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, so tests can supply variables without touching the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| first_set(&lookup, keys);

        let bind_addr = first(&["HOTEL_PORTAL_ADDR"])
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "HOTEL_PORTAL_ADDR",
                message: e.to_string(),
            })?;

        let max_connections = match first(&["DATABASE_MAX_CONNECTIONS"]) {
            Some(v) => v.parse::<u32>().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                message: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let store = match first(&["HOTEL_PORTAL_STORE"]) {
            Some(v) => v.parse()?,
            None => StoreBackend::Postgres,
        };

        Ok(AppConfig {
            bind_addr,
            database: DatabaseConfig {
                url: first(&["DATABASE_URL"]).unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
                max_connections,
            },
            store,
            baas: BaasConfig {
                url: first(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"]),
                anon_key: first(&["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"]),
                service_role_key: first(&["SUPABASE_SERVICE_ROLE_KEY"]),
            },
            storage: StorageConfig {
                region: first(&["AWS_REGION", "NEXT_PUBLIC_AWS_REGION"]),
                access_key_id: first(&["AWS_ACCESS_KEY_ID"]),
                secret_access_key: first(&["AWS_SECRET_ACCESS_KEY"]),
                endpoint: first(&["S3_ENDPOINT"]),
                force_path_style: first(&["S3_FORCE_PATH_STYLE"]).map(|v| is_truthy(&v)).unwrap_or(false),
            },
            diagnostics: first(&["HOTEL_PORTAL_DIAGNOSTICS"]).map(|v| is_truthy(&v)).unwrap_or(false),
            bootstrap: first(&["HOTEL_PORTAL_BOOTSTRAP"]).map(|v| is_truthy(&v)).unwrap_or(false),
        })
    }
}

fn first_set<F>(lookup: &F, keys: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|&k| lookup(k))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn is_truthy(v: &str) -> bool {
    matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
