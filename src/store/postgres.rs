use super::HotelStore;
use crate::db::Database;
use crate::error::StoreError;
use crate::models::enhance_stay::OPTION_SUMMARY_COLUMNS;
use crate::models::guest::GUEST_COLUMNS;
use crate::models::{EnhanceStayOptionSummary, Guest, GuestStatus};
use crate::sql::{QueryBuf, Select, SortDirection, SqlParam};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

pub const GUESTS_TABLE: &str = "guests";
pub const OPTIONS_TABLE: &str = "enhance_stay_options";

/// `HotelStore` over PostgreSQL via the shared `Database` handle.
#[derive(Clone)]
pub struct PgStore {
    db: Database,
    schema: String,
}

impl PgStore {
    pub fn new(db: Database) -> Self {
        PgStore {
            db,
            schema: "public".into(),
        }
    }

    /// Every guest, newest first.
    fn guests_query(&self) -> QueryBuf {
        Select::from(&self.schema, GUESTS_TABLE, GUEST_COLUMNS)
            .order_by("created_at", SortDirection::Desc)
            .build()
    }

    /// Visible options of one hotel by `display_order`, ties broken by `id`.
    fn options_query(&self, hotel_id: &str) -> QueryBuf {
        Select::from(&self.schema, OPTIONS_TABLE, OPTION_SUMMARY_COLUMNS)
            .filter_eq("hotel_id", SqlParam::Text(hotel_id.to_string()))
            .filter_eq("is_visible", SqlParam::Bool(true))
            .order_by("display_order", SortDirection::Asc)
            .order_by("id", SortDirection::Asc)
            .build()
    }

    async fn fetch_all<T>(&self, q: &QueryBuf) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let pool = self.db.pool().await?;
        let mut query: QueryAs<'_, Postgres, T, PgArguments> = sqlx::query_as(&q.sql);
        for p in &q.params {
            query = match p {
                SqlParam::Text(s) => query.bind(s.as_str()),
                SqlParam::Bool(b) => query.bind(*b),
            };
        }
        Ok(query.fetch_all(pool).await?)
    }
}

/// Raw guest row; `status` is validated against the closed set on conversion.
#[derive(FromRow)]
struct GuestRow {
    id: String,
    first_name: String,
    last_name: String,
    room_number: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<GuestRow> for Guest {
    type Error = StoreError;

    fn try_from(row: GuestRow) -> Result<Self, Self::Error> {
        let status: GuestStatus = row.status.parse().map_err(StoreError::Decode)?;
        Ok(Guest {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            room_number: row.room_number,
            phone: row.phone,
            email: row.email,
            status,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl HotelStore for PgStore {
    async fn list_guests(&self) -> Result<Vec<Guest>, StoreError> {
        let q = self.guests_query();
        let rows: Vec<GuestRow> = self.fetch_all(&q).await?;
        rows.into_iter().map(Guest::try_from).collect()
    }

    async fn list_visible_options(&self, hotel_id: &str) -> Result<Vec<EnhanceStayOptionSummary>, StoreError> {
        let q = self.options_query(hotel_id);
        self.fetch_all(&q).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let pool = self.db.pool().await?;
        sqlx::query("SELECT 1").fetch_optional(pool).await?;
        Ok(())
    }
}
