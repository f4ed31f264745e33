//! Field validation rules.
//!
//! Pure predicates: the same input always yields the same verdict, and no rule
//! ever touches the draft.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::registration::{Gender, TransportType, VehicleDetails};

pub const NAME_MIN_CHARS: usize = 3;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const AGE_MIN: i32 = 1;
pub const AGE_MAX: i32 = 120;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
        .expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+$").expect("phone pattern is valid"));

/// Outcome of a single field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "message", rename_all = "snake_case")]
pub enum FieldVerdict {
    Valid,
    Invalid(String),
}

impl FieldVerdict {
    fn invalid(message: &str) -> Self {
        FieldVerdict::Invalid(message.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldVerdict::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldVerdict::Valid => None,
            FieldVerdict::Invalid(message) => Some(message),
        }
    }
}

pub fn validate_name(name: &str) -> FieldVerdict {
    let name = name.trim();
    if name.is_empty() {
        return FieldVerdict::invalid("Name is required");
    }
    if name.chars().count() < NAME_MIN_CHARS {
        return FieldVerdict::invalid("Name must be at least 3 characters");
    }
    FieldVerdict::Valid
}

pub fn validate_email(email: &str) -> FieldVerdict {
    let email = email.trim();
    if email.is_empty() {
        return FieldVerdict::invalid("Email is required");
    }
    if !EMAIL_RE.is_match(email) {
        return FieldVerdict::invalid("Please enter a valid email address");
    }
    FieldVerdict::Valid
}

/// Digits only, with at most one leading `+`. Spaces and dashes are rejected.
pub fn validate_phone(phone: &str) -> FieldVerdict {
    if phone.trim().is_empty() {
        return FieldVerdict::invalid("Phone number is required");
    }
    if !PHONE_RE.is_match(phone) {
        return FieldVerdict::invalid("Phone number may only contain digits and a leading +");
    }
    let digits = phone.trim_start_matches('+').len();
    if digits < PHONE_MIN_DIGITS {
        return FieldVerdict::invalid("Phone number must have at least 10 digits");
    }
    FieldVerdict::Valid
}

pub fn validate_city(city: &str) -> FieldVerdict {
    if city.trim().is_empty() {
        return FieldVerdict::invalid("City is required");
    }
    FieldVerdict::Valid
}

pub fn validate_age(age: Option<i32>) -> FieldVerdict {
    match age {
        None => FieldVerdict::invalid("Age is required"),
        Some(age) if (AGE_MIN..=AGE_MAX).contains(&age) => FieldVerdict::Valid,
        Some(_) => FieldVerdict::invalid("Age must be between 1 and 120"),
    }
}

pub fn validate_gender(gender: Option<Gender>) -> FieldVerdict {
    match gender {
        Some(_) => FieldVerdict::Valid,
        None => FieldVerdict::invalid("Gender is required"),
    }
}

pub fn validate_language(language: &str) -> FieldVerdict {
    if language.trim().is_empty() {
        return FieldVerdict::invalid("Preferred language is required");
    }
    FieldVerdict::Valid
}

pub fn validate_transport_type(transport_type: Option<TransportType>) -> FieldVerdict {
    match transport_type {
        Some(_) => FieldVerdict::Valid,
        None => FieldVerdict::invalid("Please select a transport type"),
    }
}

/// Seats are only required when a private vehicle offers empty seats.
pub fn validate_available_seats(
    transport_type: Option<TransportType>,
    vehicle: &VehicleDetails,
) -> FieldVerdict {
    if transport_type != Some(TransportType::Private) || !vehicle.has_empty_seats {
        return FieldVerdict::Valid;
    }
    match vehicle.available_seats {
        None => FieldVerdict::invalid("Please enter the number of available seats"),
        Some(seats) if seats > 0 => FieldVerdict::Valid,
        Some(_) => FieldVerdict::invalid("Please enter a valid number of seats"),
    }
}
