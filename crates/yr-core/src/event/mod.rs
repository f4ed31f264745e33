//! Event domain: the single recurring event this desk registers people for.
//!
//! Everything here is read-only data loaded from configuration.

mod countdown;

pub use countdown::Countdown;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of the event, as known to the registration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDay {
    pub id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelInfo {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Static event details shown on the informational pages and used to build
/// submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub id: String,
    pub name: String,
    pub starts_at: DateTime<FixedOffset>,
    pub days: Vec<EventDay>,
    pub contact: ContactInfo,
    pub hotels: Vec<HotelInfo>,
}

impl EventInfo {
    /// Event days sorted ascending by date.
    pub fn sorted_days(&self) -> Vec<EventDay> {
        let mut days = self.days.clone();
        days.sort_by_key(|day| day.date);
        days
    }

    pub fn day_dates(&self) -> Vec<NaiveDate> {
        self.sorted_days().into_iter().map(|day| day.date).collect()
    }

    pub fn day_id(&self, date: NaiveDate) -> Option<&str> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.id.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::event_info;
    use super::*;

    #[test]
    fn sorted_days_orders_by_date() {
        let ids: Vec<_> = event_info()
            .sorted_days()
            .into_iter()
            .map(|day| day.id)
            .collect();
        assert_eq!(ids, vec!["day-1", "day-2"]);
    }

    #[test]
    fn day_id_looks_up_by_date() {
        let info = event_info();
        let date = NaiveDate::from_ymd_opt(2026, 12, 21).unwrap();

        assert_eq!(info.day_id(date), Some("day-2"));
        assert_eq!(info.day_id(date.succ_opt().unwrap()), None);
    }
}
