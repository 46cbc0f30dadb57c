//! Read access to hotel data. Handlers depend on the `HotelStore` trait so the backing store
//! (PostgreSQL, or the in-process store for local runs and tests) is chosen at startup.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{PgStore, GUESTS_TABLE, OPTIONS_TABLE};

use crate::error::StoreError;
use crate::models::{EnhanceStayOptionSummary, Guest};
use async_trait::async_trait;

#[async_trait]
pub trait HotelStore: Send + Sync {
    /// All guests, newest `created_at` first.
    async fn list_guests(&self) -> Result<Vec<Guest>, StoreError>;

    /// Visible options of one hotel, ascending `display_order`, ties by `id`.
    async fn list_visible_options(&self, hotel_id: &str) -> Result<Vec<EnhanceStayOptionSummary>, StoreError>;

    /// Round trip to the backing store; `/ready` answers 503 while it fails.
    async fn ping(&self) -> Result<(), StoreError>;
}
