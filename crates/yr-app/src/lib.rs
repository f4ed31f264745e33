//! Yatra Registration Application Layer
//!
//! This crate contains the registration use cases, the wizard orchestrator and
//! the per-step view models rendered by any presentation surface.

pub mod usecases;
pub mod views;

pub use usecases::wizard::{WizardError, WizardOrchestrator};
