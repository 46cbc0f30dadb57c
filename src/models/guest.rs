use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Guest lifecycle status, stored as its display string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestStatus {
    #[serde(rename = "Reserved")]
    Reserved,
    #[serde(rename = "Checked In")]
    CheckedIn,
    #[serde(rename = "Checked Out")]
    CheckedOut,
}

impl GuestStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Reserved => "Reserved",
            GuestStatus::CheckedIn => "Checked In",
            GuestStatus::CheckedOut => "Checked Out",
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GuestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reserved" => Ok(GuestStatus::Reserved),
            "Checked In" => Ok(GuestStatus::CheckedIn),
            "Checked Out" => Ok(GuestStatus::CheckedOut),
            other => Err(format!("unknown guest status: {}", other)),
        }
    }
}

impl TryFrom<String> for GuestStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Admin guest-list projection. Field names serialize in camelCase (the storage model's naming);
/// the guests endpoint renames them for the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub room_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: GuestStatus,
    pub created_at: DateTime<Utc>,
}

/// Columns selected for the guest list, in response order.
pub const GUEST_COLUMNS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "room_number",
    "phone",
    "email",
    "status",
    "created_at",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display_strings() {
        for status in [GuestStatus::Reserved, GuestStatus::CheckedIn, GuestStatus::CheckedOut] {
            assert_eq!(status.as_str().parse::<GuestStatus>(), Ok(status));
        }
        assert_eq!(serde_json::to_value(GuestStatus::CheckedIn).unwrap(), "Checked In");
    }

    #[test]
    fn status_set_is_closed() {
        assert!("checked in".parse::<GuestStatus>().is_err());
        assert!(GuestStatus::try_from("Departed".to_string()).is_err());
    }
}
