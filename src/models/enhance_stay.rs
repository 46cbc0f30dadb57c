use rust_decimal::Decimal;
use serde::Serialize;

/// Hotel-scoped upsell catalog entry as stored.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct EnhanceStayOption {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_visible: bool,
    pub display_order: i32,
}

/// Fields exposed to guests; serialized with camelCase keys (`imageUrl`).
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceStayOptionSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl From<&EnhanceStayOption> for EnhanceStayOptionSummary {
    fn from(o: &EnhanceStayOption) -> Self {
        EnhanceStayOptionSummary {
            id: o.id.clone(),
            name: o.name.clone(),
            description: o.description.clone(),
            category: o.category.clone(),
            price: o.price,
            image_url: o.image_url.clone(),
        }
    }
}

pub const OPTION_SUMMARY_COLUMNS: &[&str] = &["id", "name", "description", "category", "price", "image_url"];
