//! Aggregated validation over participants and the vehicle step.
//!
//! Error maps are derived on demand and never stored in the draft.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rules::{
    validate_age, validate_available_seats, validate_city, validate_email, validate_gender,
    validate_language, validate_name, validate_phone, validate_transport_type, FieldVerdict,
};
use crate::registration::{Participant, RegistrationDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantField {
    Name,
    Email,
    Phone,
    City,
    Age,
    Gender,
    Language,
}

impl ParticipantField {
    pub const ALL: [ParticipantField; 7] = [
        ParticipantField::Name,
        ParticipantField::Email,
        ParticipantField::Phone,
        ParticipantField::City,
        ParticipantField::Age,
        ParticipantField::Gender,
        ParticipantField::Language,
    ];
}

/// Field → message for one participant. Empty means valid.
pub type ParticipantErrors = BTreeMap<ParticipantField, String>;

/// Participant index → errors, only for participants that failed.
pub type ParticipantErrorMap = BTreeMap<usize, ParticipantErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VehicleErrors {
    pub transport_type: Option<String>,
    pub available_seats: Option<String>,
}

impl VehicleErrors {
    pub fn is_empty(&self) -> bool {
        self.transport_type.is_none() && self.available_seats.is_none()
    }
}

pub fn validate_participant_field(participant: &Participant, field: ParticipantField) -> FieldVerdict {
    match field {
        ParticipantField::Name => validate_name(&participant.name),
        ParticipantField::Email => validate_email(&participant.email),
        ParticipantField::Phone => validate_phone(&participant.phone),
        ParticipantField::City => validate_city(&participant.city),
        ParticipantField::Age => validate_age(participant.age),
        ParticipantField::Gender => validate_gender(participant.gender),
        ParticipantField::Language => validate_language(&participant.language),
    }
}

pub fn validate_participant(participant: &Participant) -> ParticipantErrors {
    ParticipantField::ALL
        .iter()
        .filter_map(|field| match validate_participant_field(participant, *field) {
            FieldVerdict::Valid => None,
            FieldVerdict::Invalid(message) => Some((*field, message)),
        })
        .collect()
}

pub fn validate_participants(participants: &[Participant]) -> ParticipantErrorMap {
    participants
        .iter()
        .enumerate()
        .filter_map(|(index, participant)| {
            let errors = validate_participant(participant);
            (!errors.is_empty()).then_some((index, errors))
        })
        .collect()
}

pub fn validate_vehicle(draft: &RegistrationDraft) -> VehicleErrors {
    VehicleErrors {
        transport_type: validate_transport_type(draft.transport_type)
            .message()
            .map(str::to_string),
        available_seats: validate_available_seats(draft.transport_type, &draft.vehicle)
            .message()
            .map(str::to_string),
    }
}
