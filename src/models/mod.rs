//! Hotel records as read from storage.

pub mod enhance_stay;
pub mod feedback;
pub mod guest;

pub use enhance_stay::{EnhanceStayOption, EnhanceStayOptionSummary};
pub use guest::{Guest, GuestStatus};
