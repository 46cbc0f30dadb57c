use super::HotelStore;
use crate::error::StoreError;
use crate::models::{EnhanceStayOption, EnhanceStayOptionSummary, Guest, GuestStatus};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

/// In-process `HotelStore` with the same filtering and ordering as `PgStore`.
/// Used for local runs without a database and as a seeded dataset in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    guests: Vec<Guest>,
    options: Vec<EnhanceStayOption>,
}

impl MemoryStore {
    pub fn new(guests: Vec<Guest>, options: Vec<EnhanceStayOption>) -> Self {
        MemoryStore { guests, options }
    }

    /// Small dataset for `HOTEL_PORTAL_STORE=memory`.
    pub fn demo() -> Self {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).single().unwrap_or_else(Utc::now);
        let guest = |id: &str, first: &str, last: &str, room: &str, status, minutes: i64| Guest {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            room_number: Some(room.into()),
            phone: None,
            email: Some(format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase())),
            status,
            created_at: base + Duration::minutes(minutes),
        };
        let option = |id: &str, name: &str, category: &str, cents: i64, visible, order| EnhanceStayOption {
            id: id.into(),
            hotel_id: "demo-hotel".into(),
            name: name.into(),
            description: None,
            category: Some(category.into()),
            price: Decimal::new(cents, 2),
            image_url: None,
            is_visible: visible,
            display_order: order,
        };
        MemoryStore::new(
            vec![
                guest("g-1", "Ada", "Lovelace", "101", GuestStatus::CheckedIn, 0),
                guest("g-2", "Alan", "Turing", "204", GuestStatus::Reserved, 45),
                guest("g-3", "Grace", "Hopper", "310", GuestStatus::CheckedOut, 90),
            ],
            vec![
                option("o-1", "Late checkout", "convenience", 2500, true, 1),
                option("o-2", "Breakfast in bed", "dining", 3200, true, 2),
                option("o-3", "Spa credit", "wellness", 5000, false, 3),
            ],
        )
    }
}

#[async_trait]
impl HotelStore for MemoryStore {
    async fn list_guests(&self) -> Result<Vec<Guest>, StoreError> {
        let mut guests = self.guests.clone();
        guests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(guests)
    }

    async fn list_visible_options(&self, hotel_id: &str) -> Result<Vec<EnhanceStayOptionSummary>, StoreError> {
        let mut options: Vec<&EnhanceStayOption> = self
            .options
            .iter()
            .filter(|o| o.hotel_id == hotel_id && o.is_visible)
            .collect();
        options.sort_by(|a, b| a.display_order.cmp(&b.display_order).then_with(|| a.id.cmp(&b.id)));
        Ok(options.into_iter().map(EnhanceStayOptionSummary::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
