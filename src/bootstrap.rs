//! Optional startup DDL: create the database and the tables the stores read when they are missing.

use crate::error::{BootstrapError, ConfigError, StoreError};
use crate::store::{GUESTS_TABLE, OPTIONS_TABLE};
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection, PgPool};
use std::str::FromStr;

/// Maintenance database every server has; the target database is created from there.
const MAINTENANCE_DB: &str = "postgres";

/// Where to connect to create the target database, and its name.
#[derive(Debug)]
struct CreateTarget {
    maintenance: PgConnectOptions,
    name: String,
}

/// Resolve `DATABASE_URL` into a creation target. `None` when the URL names no database
/// or names the maintenance database itself.
fn create_target(database_url: &str) -> Result<Option<CreateTarget>, ConfigError> {
    let options = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        message: e.to_string(),
    })?;
    let name = match options.get_database().map(str::trim) {
        Some(name) if !name.is_empty() && name != MAINTENANCE_DB => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some(CreateTarget {
        maintenance: options.database(MAINTENANCE_DB),
        name,
    }))
}

/// Create the database named in `database_url` when the server does not have it yet.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), BootstrapError> {
    let Some(target) = create_target(database_url)? else {
        return Ok(());
    };
    create_if_missing(&target).await?;
    Ok(())
}

async fn create_if_missing(target: &CreateTarget) -> Result<(), StoreError> {
    let mut conn: PgConnection = target.maintenance.connect().await?;
    let (present,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&target.name)
        .fetch_one(&mut conn)
        .await?;
    if present {
        tracing::debug!(database = %target.name, "database present");
        return Ok(());
    }
    tracing::info!(database = %target.name, "creating database");
    sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&target.name)))
        .execute(&mut conn)
        .await?;
    Ok(())
}

/// CREATE TABLE IF NOT EXISTS for guests and enhance-stay options.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    let guests = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            room_number TEXT,
            phone TEXT,
            email TEXT,
            status TEXT NOT NULL DEFAULT 'Reserved'
                CHECK (status IN ('Reserved', 'Checked In', 'Checked Out')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        quote_ident(GUESTS_TABLE)
    );
    let options = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
            hotel_id TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            category TEXT,
            price NUMERIC(10, 2) NOT NULL DEFAULT 0,
            image_url TEXT,
            is_visible BOOLEAN NOT NULL DEFAULT TRUE,
            display_order INTEGER NOT NULL DEFAULT 0
        )
        "#,
        quote_ident(OPTIONS_TABLE)
    );
    let options_index = format!(
        "CREATE INDEX IF NOT EXISTS enhance_stay_options_hotel_order_idx ON {} (hotel_id, display_order)",
        quote_ident(OPTIONS_TABLE)
    );
    for ddl in [guests, options, options_index] {
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!("schema ensured");
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
