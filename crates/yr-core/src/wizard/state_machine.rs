//! Registration wizard state machine.
//!
//! Defines a pure state transition function for the registration flow. Side
//! effects (draft resets, submission, notices) are returned as actions for the
//! orchestrator to execute.

use serde::{Deserialize, Serialize};

use crate::registration::{RegistrationDraft, RegistrationResponse};
use crate::validation::{validate_participants, validate_vehicle, ParticipantErrorMap, VehicleErrors};

/// Wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    /// Step 0: registration type and personal details.
    TypeAndPersonal,
    /// Step 1: daily preferences, one sub-step per event day (ascending).
    Preferences { day_index: usize },
    /// Step 2: transport and vehicle details; submits on success.
    Vehicle,
    /// Terminal: the registration service accepted the submission.
    Submitted,
}

impl WizardState {
    pub fn step_index(&self) -> usize {
        match self {
            WizardState::TypeAndPersonal => 0,
            WizardState::Preferences { .. } => 1,
            WizardState::Vehicle => 2,
            WizardState::Submitted => 3,
        }
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Forward navigation, gated by validation.
    Next,
    /// Backward navigation; never validates.
    Back,
    /// Previous event day inside the preferences step.
    PreviousDay,
    /// Jump to an event day inside the preferences step.
    SelectDay { index: usize },
    /// Registration service accepted the submission.
    SubmissionSucceeded { response: RegistrationResponse },
    /// Registration service call failed.
    SubmissionFailed { reason: String },
    /// Begin a new registration after a successful one.
    StartOver,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    OpenParticipant { index: usize },
    ShowParticipantErrors(ParticipantErrorMap),
    ClearParticipantErrors,
    ShowVehicleErrors(VehicleErrors),
    ClearVehicleErrors,
    PopulateEventDays,
    SubmitRegistration,
    ResetDraft,
    RecordResponse(RegistrationResponse),
    NavigateToConfirmation,
    NotifySubmissionFailed { reason: String },
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    /// Computes the next state and the actions the orchestrator must run.
    ///
    /// ## Behavior
    ///
    /// - **Personal details**: `Next` validates every participant. On failure
    ///   the state stays put and the first invalid participant is opened.
    /// - **Preferences**: `Next` advances one event day, then moves to the
    ///   vehicle step after the last one. `PreviousDay` and `SelectDay` are
    ///   clamped to the configured days.
    /// - **Vehicle**: `Next` validates transport and seats, then asks for a
    ///   submission. The outcome arrives as a follow-up event.
    /// - **Back**: never validates; from the vehicle step it lands on the last
    ///   event day.
    /// - **Anything else**: ignored, no actions.
    ///
    /// `day_count` is the number of configured event days. With no days the
    /// preferences step is a single empty sub-step.
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        draft: &RegistrationDraft,
        day_count: usize,
    ) -> (WizardState, Vec<WizardAction>) {
        let last_day = day_count.saturating_sub(1);

        match (state, event) {
            (WizardState::TypeAndPersonal, WizardEvent::Next) => {
                let errors = validate_participants(&draft.participants);
                match errors.keys().next().copied() {
                    None => (
                        WizardState::Preferences { day_index: 0 },
                        vec![
                            WizardAction::ClearParticipantErrors,
                            WizardAction::PopulateEventDays,
                        ],
                    ),
                    Some(first_invalid) => (
                        WizardState::TypeAndPersonal,
                        vec![
                            WizardAction::OpenParticipant {
                                index: first_invalid,
                            },
                            WizardAction::ShowParticipantErrors(errors),
                        ],
                    ),
                }
            }
            (WizardState::Preferences { day_index }, WizardEvent::Next) => {
                if day_index < last_day {
                    (
                        WizardState::Preferences {
                            day_index: day_index + 1,
                        },
                        Vec::new(),
                    )
                } else {
                    (WizardState::Vehicle, Vec::new())
                }
            }
            (WizardState::Preferences { day_index }, WizardEvent::PreviousDay) => (
                WizardState::Preferences {
                    day_index: day_index.saturating_sub(1),
                },
                Vec::new(),
            ),
            (WizardState::Preferences { .. }, WizardEvent::SelectDay { index }) => (
                WizardState::Preferences {
                    day_index: index.min(last_day),
                },
                Vec::new(),
            ),
            (WizardState::Preferences { .. }, WizardEvent::Back) => {
                (WizardState::TypeAndPersonal, Vec::new())
            }
            (WizardState::Vehicle, WizardEvent::Next) => {
                let errors = validate_vehicle(draft);
                if errors.is_empty() {
                    (
                        WizardState::Vehicle,
                        vec![
                            WizardAction::ClearVehicleErrors,
                            WizardAction::SubmitRegistration,
                        ],
                    )
                } else {
                    (
                        WizardState::Vehicle,
                        vec![WizardAction::ShowVehicleErrors(errors)],
                    )
                }
            }
            (WizardState::Vehicle, WizardEvent::Back) => (
                WizardState::Preferences {
                    day_index: last_day,
                },
                Vec::new(),
            ),
            (WizardState::Vehicle, WizardEvent::SubmissionSucceeded { response }) => (
                WizardState::Submitted,
                vec![
                    WizardAction::ResetDraft,
                    WizardAction::RecordResponse(response),
                    WizardAction::NavigateToConfirmation,
                ],
            ),
            (WizardState::Vehicle, WizardEvent::SubmissionFailed { reason }) => (
                WizardState::Vehicle,
                vec![WizardAction::NotifySubmissionFailed { reason }],
            ),
            (WizardState::Submitted, WizardEvent::StartOver) => {
                (WizardState::TypeAndPersonal, vec![WizardAction::ResetDraft])
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}
