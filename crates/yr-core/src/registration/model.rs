//! Registration draft models.
//!
//! The draft is the in-progress, not-yet-submitted registration. It is owned
//! exclusively by [`DraftStore`](super::DraftStore); everything else reads it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::response::RegistrationResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationType {
    #[default]
    Individual,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToiletPreference {
    Indian,
    Western,
}

/// One person in the registration. Index 0 of the draft is the primary contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// `None` means "no value entered", which is not the same as zero.
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub language: String,
    pub special_requirements: Option<String>,
}

impl Default for Participant {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            age: None,
            gender: Some(Gender::M),
            language: String::new(),
            special_requirements: None,
        }
    }
}

/// Vehicle sharing details.
///
/// `available_seats` is only meaningful while the transport is private and
/// the participant offers empty seats.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub has_empty_seats: bool,
    pub available_seats: Option<i32>,
}

/// Per-day preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPreference {
    /// Tri-state: `None` until the participant answers.
    pub attending: Option<bool>,
    pub staying_with_yatra: bool,
    pub dinner_at_host: bool,
    pub breakfast_at_host: bool,
    pub lunch_with_yatra: bool,
    pub physical_limitations: Option<String>,
    pub toilet_preference: Option<ToiletPreference>,
}

impl Default for DayPreference {
    fn default() -> Self {
        Self {
            attending: None,
            staying_with_yatra: true,
            dinner_at_host: true,
            breakfast_at_host: true,
            lunch_with_yatra: true,
            physical_limitations: None,
            toilet_preference: None,
        }
    }
}

/// The in-progress registration aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub registration_type: RegistrationType,
    pub participants: Vec<Participant>,
    pub transport_type: Option<TransportType>,
    pub vehicle: VehicleDetails,
    /// Keyed by event day date; `BTreeMap` keeps the days in ascending order.
    pub preferences_by_date: BTreeMap<NaiveDate, DayPreference>,
    /// Set once a submission succeeded; gates the confirmation view.
    pub registration_response: Option<RegistrationResponse>,
}

impl RegistrationDraft {
    /// Initial state: one empty participant, no transport, no shared seats.
    pub fn initial() -> Self {
        Self {
            registration_type: RegistrationType::Individual,
            participants: vec![Participant::default()],
            transport_type: None,
            vehicle: VehicleDetails::default(),
            preferences_by_date: BTreeMap::new(),
            registration_response: None,
        }
    }

    pub fn primary_contact(&self) -> Option<&Participant> {
        self.participants.first()
    }

    pub fn is_submitted(&self) -> bool {
        self.registration_response.is_some()
    }

    /// Whether the vehicle step needs a seat count.
    pub fn shares_private_seats(&self) -> bool {
        self.transport_type == Some(TransportType::Private) && self.vehicle.has_empty_seats
    }
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::initial()
    }
}
