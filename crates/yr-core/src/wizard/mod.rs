//! Wizard domain module.
//!
//! This module defines the registration wizard state machine types.

pub mod state_machine;

pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
