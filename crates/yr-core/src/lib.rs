//! # yr-core
//!
//! Core domain models and registration rules for the Yatra registration desk.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod event;
pub mod ports;
pub mod registration;
pub mod validation;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use event::{Countdown, EventInfo};
pub use registration::{DraftStore, RegistrationDraft, RegistrationResponse, SubmissionPayload};
pub use wizard::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
