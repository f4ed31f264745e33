//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business rules**: the event schedule is accepted as written;
//!    the draft store and wizard decide what to do with it.

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::event::{ContactInfo, EventDay, EventInfo, HotelInfo};

pub const DEFAULT_REGISTRATION_PATH: &str = "/api/registrations/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_registration_path() -> String {
    DEFAULT_REGISTRATION_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Registration service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_registration_path")]
    pub registration_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Full submission URL; tolerates a trailing slash on the base URL.
    pub fn registration_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.registration_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub starts_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub days: Vec<EventDay>,
}

/// Application configuration DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub event: EventConfig,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub hotels: Vec<HotelInfo>,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse config as TOML")
    }

    pub fn event_info(&self) -> EventInfo {
        EventInfo {
            id: self.event.id.clone(),
            name: self.event.name.clone(),
            starts_at: self.event.starts_at,
            days: self.event.days.clone(),
            contact: self.contact.clone(),
            hotels: self.hotels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FULL: &str = r#"
        [api]
        base_url = "https://registrations.example.org/"
        timeout_secs = 10

        [event]
        id = "yatra-2026"
        name = "Winter Yatra"
        starts_at = "2026-12-20T05:00:00+05:30"

        [[event.days]]
        id = "d1"
        date = "2026-12-20"

        [[event.days]]
        id = "d2"
        date = "2026-12-21"

        [contact]
        email = "desk@example.org"
        phone = "+911234567890"

        [[hotels]]
        name = "Dharamshala"
        address = "Station Road"
    "#;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let config = AppConfig::from_toml_str(FULL).unwrap();

        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.registration_path, DEFAULT_REGISTRATION_PATH);
        assert_eq!(config.event.days.len(), 2);
        assert_eq!(
            config.event.days[1].date,
            NaiveDate::from_ymd_opt(2026, 12, 21).unwrap()
        );
        assert_eq!(config.contact.email, "desk@example.org");
        assert_eq!(config.contact.address, "");
        assert_eq!(config.hotels[0].phone, None);
    }

    #[test]
    fn test_registration_url_joins_without_double_slash() {
        let config = AppConfig::from_toml_str(FULL).unwrap();

        assert_eq!(
            config.api.registration_url(),
            "https://registrations.example.org/api/registrations/"
        );
    }

    #[test]
    fn test_event_info_carries_contact_and_hotels() {
        let info = AppConfig::from_toml_str(FULL).unwrap().event_info();

        assert_eq!(info.id, "yatra-2026");
        assert_eq!(info.hotels.len(), 1);
        assert_eq!(info.contact.phone, "+911234567890");
    }

    #[test]
    fn test_missing_event_section_is_an_error() {
        let result = AppConfig::from_toml_str("[api]\nbase_url = \"http://x\"\n");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
