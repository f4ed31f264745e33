//! Submission payload projection.
//!
//! The payload is a pure projection of the draft; nothing computed here is
//! written back. `floor_preference` exists only on the wire.

use serde::{Deserialize, Serialize};

use super::model::{Gender, RegistrationDraft, RegistrationType, ToiletPreference, TransportType};
use crate::event::EventInfo;

/// Participants at or above this age are assigned a ground floor room.
pub const GROUND_FLOOR_MIN_AGE: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorPreference {
    Ground,
    Any,
}

impl FloorPreference {
    pub fn for_age(age: i32) -> Self {
        if age >= GROUND_FLOOR_MIN_AGE {
            FloorPreference::Ground
        } else {
            FloorPreference::Any
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmittedMemberStatus {
    Registered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPayload {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub city: String,
    pub age: i32,
    pub gender: Gender,
    pub language: String,
    pub floor_preference: FloorPreference,
    pub status: SubmittedMemberStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPreferencePayload {
    pub event_day_id: String,
    pub staying_with_yatra: bool,
    pub dinner_at_host: bool,
    pub breakfast_at_host: bool,
    pub lunch_with_yatra: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_limitations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toilet_preference: Option<ToiletPreference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub event_id: String,
    pub registration_type: RegistrationType,
    pub number_of_members: usize,
    pub transportation_mode: TransportType,
    pub has_empty_seats: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_seats_count: Option<i32>,
    pub members: Vec<MemberPayload>,
    pub daily_preferences: Vec<DailyPreferencePayload>,
}

/// Raised when the draft is projected before it passed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("transport type is not selected")]
    MissingTransport,
    #[error("participant {index} has no age")]
    MissingAge { index: usize },
    #[error("participant {index} has no gender")]
    MissingGender { index: usize },
}

/// Builds the request body from a validated draft.
///
/// Free-text member fields (name, phone, email, city, language) are sent
/// trimmed.
///
/// Only days with `attending == Some(true)` are included; days marked
/// not-attending or left unanswered are omitted rather than sent as false.
pub fn build_submission_payload(
    draft: &RegistrationDraft,
    event: &EventInfo,
) -> Result<SubmissionPayload, PayloadError> {
    let transportation_mode = draft.transport_type.ok_or(PayloadError::MissingTransport)?;

    let members = draft
        .participants
        .iter()
        .enumerate()
        .map(|(index, participant)| {
            let age = participant.age.ok_or(PayloadError::MissingAge { index })?;
            let gender = participant
                .gender
                .ok_or(PayloadError::MissingGender { index })?;
            Ok(MemberPayload {
                name: participant.name.trim().to_string(),
                phone_number: participant.phone.trim().to_string(),
                email: participant.email.trim().to_string(),
                city: participant.city.trim().to_string(),
                age,
                gender,
                language: participant.language.trim().to_string(),
                floor_preference: FloorPreference::for_age(age),
                status: SubmittedMemberStatus::Registered,
            })
        })
        .collect::<Result<Vec<_>, PayloadError>>()?;

    let daily_preferences = draft
        .preferences_by_date
        .iter()
        .filter(|(_, day)| day.attending == Some(true))
        .filter_map(|(date, day)| {
            event.day_id(*date).map(|day_id| DailyPreferencePayload {
                event_day_id: day_id.to_string(),
                staying_with_yatra: day.staying_with_yatra,
                dinner_at_host: day.dinner_at_host,
                breakfast_at_host: day.breakfast_at_host,
                lunch_with_yatra: day.lunch_with_yatra,
                physical_limitations: day
                    .physical_limitations
                    .as_ref()
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty()),
                toilet_preference: day.toilet_preference,
            })
        })
        .collect();

    let shares_seats = draft.shares_private_seats();

    Ok(SubmissionPayload {
        event_id: event.id.clone(),
        registration_type: draft.registration_type,
        number_of_members: members.len(),
        transportation_mode,
        has_empty_seats: shares_seats,
        available_seats_count: if shares_seats {
            draft.vehicle.available_seats
        } else {
            None
        },
        members,
        daily_preferences,
    })
}
