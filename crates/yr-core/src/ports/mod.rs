//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the registration rules
//! independent of HTTP clients, clocks and the rendering surface.

mod clock;
pub mod registration_submission;
mod wizard_event_port;

pub use clock::ClockPort;
pub use registration_submission::{RegistrationSubmissionPort, SubmissionError};
pub use wizard_event_port::WizardEventPort;
