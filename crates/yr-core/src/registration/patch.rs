//! Patch payloads for the draft store.
//!
//! A patch is a partial update: `None` leaves the field untouched. Fields that
//! are themselves optional use a double option so a patch can clear them
//! (`Some(None)`). Applying the same patch twice gives the same result.

use serde::{Deserialize, Serialize};

use super::model::{DayPreference, Gender, Participant, ToiletPreference, VehicleDetails};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub age: Option<Option<i32>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub gender: Option<Option<Gender>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub special_requirements: Option<Option<String>>,
}

impl ParticipantPatch {
    pub fn apply(&self, participant: &mut Participant) {
        if let Some(name) = &self.name {
            participant.name = name.clone();
        }
        if let Some(email) = &self.email {
            participant.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            participant.phone = phone.clone();
        }
        if let Some(city) = &self.city {
            participant.city = city.clone();
        }
        if let Some(age) = self.age {
            participant.age = age;
        }
        if let Some(gender) = self.gender {
            participant.gender = gender;
        }
        if let Some(language) = &self.language {
            participant.language = language.clone();
        }
        if let Some(special) = &self.special_requirements {
            participant.special_requirements = special.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehiclePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_empty_seats: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub available_seats: Option<Option<i32>>,
}

impl VehiclePatch {
    pub fn apply(&self, vehicle: &mut VehicleDetails) {
        if let Some(has_empty_seats) = self.has_empty_seats {
            vehicle.has_empty_seats = has_empty_seats;
        }
        if let Some(seats) = self.available_seats {
            vehicle.available_seats = seats;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPreferencePatch {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub attending: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staying_with_yatra: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner_at_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast_at_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_with_yatra: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub physical_limitations: Option<Option<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub toilet_preference: Option<Option<ToiletPreference>>,
}

impl DayPreferencePatch {
    pub fn apply(&self, day: &mut DayPreference) {
        if let Some(attending) = self.attending {
            day.attending = attending;
        }
        if let Some(value) = self.staying_with_yatra {
            day.staying_with_yatra = value;
        }
        if let Some(value) = self.dinner_at_host {
            day.dinner_at_host = value;
        }
        if let Some(value) = self.breakfast_at_host {
            day.breakfast_at_host = value;
        }
        if let Some(value) = self.lunch_with_yatra {
            day.lunch_with_yatra = value;
        }
        if let Some(limitations) = &self.physical_limitations {
            day.physical_limitations = limitations.clone();
        }
        if let Some(toilet) = self.toilet_preference {
            day.toilet_preference = toilet;
        }
    }
}
