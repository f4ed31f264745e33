//! Validation rules for the registration wizard.

mod report;
mod rules;

pub use report::{
    validate_participant, validate_participant_field, validate_participants, validate_vehicle,
    ParticipantErrorMap, ParticipantErrors, ParticipantField, VehicleErrors,
};
pub use rules::{
    validate_age, validate_available_seats, validate_city, validate_email, validate_gender,
    validate_language, validate_name, validate_phone, validate_transport_type, FieldVerdict,
};
