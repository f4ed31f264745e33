//! Registration use cases
//!
//! [WizardOrchestrator]
//        ↓ (Vehicle + Next)
// SubmitRegistration → RegistrationSubmissionPort
//
// GetEventInfo / GetCountdown → informational pages

pub mod event_info;
pub mod submit_registration;
pub mod wizard;

pub use event_info::{GetCountdown, GetEventInfo};
pub use submit_registration::{SubmitRegistration, SubmitRegistrationError};
pub use wizard::WizardOrchestrator;
