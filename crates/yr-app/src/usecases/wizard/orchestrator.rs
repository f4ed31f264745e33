//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine, the draft store and the
//! submission side effect. It owns the only mutable draft; rendering surfaces
//! reach it exclusively through the methods below.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn, Instrument};
use yr_core::event::EventInfo;
use yr_core::ports::WizardEventPort;
use yr_core::registration::{
    DayPreferencePatch, DraftStore, ParticipantPatch, RegistrationDraft, RegistrationType,
    TransportType, VehiclePatch,
};
use yr_core::validation::{
    validate_available_seats, validate_participant_field, validate_transport_type,
    ParticipantField,
};
use yr_core::wizard::{WizardAction, WizardEvent, WizardState, WizardStateMachine};

use crate::usecases::submit_registration::SubmitRegistration;
use crate::usecases::wizard::context::{Notice, NoticeKind, WizardContext, WizardSession};
use crate::views::{render_wizard, ConfirmationView, WizardView};

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("a registration submission is already in progress")]
    SubmissionInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    TransportType,
    AvailableSeats,
}

/// Resets the busy flag when the submission attempt ends, however it ends.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Orchestrator that drives wizard state and side effects.
///
/// ## Behavior
///
/// - **Edits** (`patch_participant`, `set_transport_type`, ...) write through
///   the draft store and never change the wizard step.
/// - **Navigation** (`next`, `back`, `previous_day`, `select_day`,
///   `start_over`) runs one transition of [`WizardStateMachine`] and executes
///   the returned actions. A submission result is fed back as a follow-up
///   event in the same call.
/// - **Views**: every operation answers with a freshly rendered
///   [`WizardView`].
///
/// ## Errors
///
/// Navigation returns [`WizardError::SubmissionInFlight`] while a submission
/// is outstanding. Submission failures are not errors here: they keep the
/// draft and surface as a [`Notice`] on the vehicle step.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    submitting: AtomicBool,
    event: Arc<EventInfo>,

    submit_registration: Arc<SubmitRegistration>,
    wizard_event_port: Arc<dyn WizardEventPort>,
}

impl WizardOrchestrator {
    pub fn new(
        event: Arc<EventInfo>,
        submit_registration: Arc<SubmitRegistration>,
        wizard_event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        let store = DraftStore::new(event.day_dates());
        Self {
            context: WizardContext::new(store).arc(),
            submitting: AtomicBool::new(false),
            event,
            submit_registration,
            wizard_event_port,
        }
    }

    // ----- reads -----------------------------------------------------------

    pub async fn view(&self) -> WizardView {
        let session = self.context.session().await;
        render_wizard(&session, &self.event, self.is_submitting())
    }

    pub async fn get_state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn draft(&self) -> RegistrationDraft {
        self.context.session().await.store.draft().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    // ----- draft edits -----------------------------------------------------

    pub async fn set_registration_type(&self, registration_type: RegistrationType) -> WizardView {
        self.edit(|session| session.store.set_registration_type(registration_type))
            .await
    }

    pub async fn patch_participant(&self, index: usize, patch: ParticipantPatch) -> WizardView {
        self.edit(|session| session.store.patch_participant(index, &patch))
            .await
    }

    pub async fn add_participant(&self) -> WizardView {
        self.edit(|session| {
            let index = session.store.add_participant();
            session.open_participant = index;
        })
        .await
    }

    pub async fn remove_participant(&self, index: usize) -> WizardView {
        self.edit(|session| {
            let before = session.store.draft().participants.len();
            session.store.remove_participant(index);
            if session.store.draft().participants.len() < before {
                session.shift_after_removal(index);
            }
        })
        .await
    }

    pub async fn set_transport_type(&self, transport_type: TransportType) -> WizardView {
        self.edit(|session| {
            session.store.set_transport_type(transport_type);
            if transport_type == TransportType::Public {
                session.vehicle_errors.available_seats = None;
            }
        })
        .await
    }

    pub async fn patch_vehicle(&self, patch: VehiclePatch) -> WizardView {
        self.edit(|session| session.store.patch_vehicle(&patch)).await
    }

    pub async fn set_day_preference(&self, date: NaiveDate, patch: DayPreferencePatch) -> WizardView {
        self.edit(|session| session.store.set_day_preference(date, &patch))
            .await
    }

    pub async fn reset_draft(&self) -> WizardView {
        self.edit(|session| session.reset()).await
    }

    // ----- panels, blur validation, notices --------------------------------

    /// Opens a participant panel; out-of-range indices select the last one.
    pub async fn open_participant(&self, index: usize) -> WizardView {
        self.edit(|session| {
            let last = session.store.draft().participants.len().saturating_sub(1);
            session.open_participant = index.min(last);
        })
        .await
    }

    /// Re-validates one participant field and updates only that field's error.
    pub async fn blur_participant_field(&self, index: usize, field: ParticipantField) -> WizardView {
        self.edit(|session| {
            let Some(participant) = session.store.draft().participants.get(index) else {
                warn!(index, ?field, "blur ignored: participant index out of range");
                return;
            };
            let verdict = validate_participant_field(participant, field);
            let errors = session.participant_errors.entry(index).or_default();
            match verdict.message() {
                Some(message) => {
                    errors.insert(field, message.to_string());
                }
                None => {
                    errors.remove(&field);
                }
            }
            if errors.is_empty() {
                session.participant_errors.remove(&index);
            }
        })
        .await
    }

    pub async fn blur_vehicle_field(&self, field: VehicleField) -> WizardView {
        self.edit(|session| {
            let draft = session.store.draft();
            match field {
                VehicleField::TransportType => {
                    session.vehicle_errors.transport_type =
                        validate_transport_type(draft.transport_type)
                            .message()
                            .map(str::to_string);
                }
                VehicleField::AvailableSeats => {
                    session.vehicle_errors.available_seats =
                        validate_available_seats(draft.transport_type, &draft.vehicle)
                            .message()
                            .map(str::to_string);
                }
            }
        })
        .await
    }

    pub async fn dismiss_notice(&self) -> WizardView {
        self.edit(|session| session.notice = None).await
    }

    /// Entering the confirmation view hands out the recorded response and
    /// resets the draft so a later visit cannot see stale data.
    pub async fn enter_confirmation(&self) -> Option<ConfirmationView> {
        let mut session = self.context.session().await;
        let response = session.store.draft().registration_response.clone();
        session.reset();
        debug!(
            has_response = response.is_some(),
            "confirmation view entered, draft reset"
        );
        response.map(ConfirmationView::from)
    }

    // ----- navigation ------------------------------------------------------

    pub async fn next(&self) -> Result<WizardView, WizardError> {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn back(&self) -> Result<WizardView, WizardError> {
        self.dispatch(WizardEvent::Back).await
    }

    pub async fn previous_day(&self) -> Result<WizardView, WizardError> {
        self.dispatch(WizardEvent::PreviousDay).await
    }

    pub async fn select_day(&self, index: usize) -> Result<WizardView, WizardError> {
        self.dispatch(WizardEvent::SelectDay { index }).await
    }

    pub async fn start_over(&self) -> Result<WizardView, WizardError> {
        self.dispatch(WizardEvent::StartOver).await
    }

    async fn edit<F>(&self, apply: F) -> WizardView
    where
        F: FnOnce(&mut WizardSession),
    {
        let mut session = self.context.session().await;
        apply(&mut session);
        render_wizard(&session, &self.event, self.is_submitting())
    }

    /// Runs one navigation event to completion.
    ///
    /// ## Behavior
    ///
    /// 1. Rejects the event while a submission is in flight
    /// 2. Takes the dispatch lock so navigations never interleave
    /// 3. Loops transition, actions and state update until no follow-up
    ///    events remain
    /// 4. Emits a state-changed event for every actual state change
    async fn dispatch(&self, event: WizardEvent) -> Result<WizardView, WizardError> {
        if self.is_submitting() {
            return Err(WizardError::SubmissionInFlight);
        }
        // Serialize navigation so two clicks never read the same state and
        // run duplicate actions.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.wizard_orchestrator.dispatch", event = ?event);
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let (from, next, actions) = {
                    let session = self.context.session().await;
                    let from = session.state.clone();
                    let day_count = session.store.event_dates().len();
                    let (next, actions) = WizardStateMachine::transition(
                        from.clone(),
                        event.clone(),
                        session.store.draft(),
                        day_count,
                    );
                    (from, next, actions)
                };
                info!(from = ?from, to = ?next, event = ?event, "wizard state transition");

                let follow_up_events = self.execute_actions(actions).await?;
                if from != next {
                    self.set_state_and_emit(next).await;
                }
                pending_events.extend(follow_up_events);
            }

            Ok(self.view().await)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<WizardAction>,
    ) -> Result<Vec<WizardEvent>, WizardError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::OpenParticipant { index } => {
                    self.context.session().await.open_participant = index;
                }
                WizardAction::ShowParticipantErrors(errors) => {
                    self.context.session().await.participant_errors = errors;
                }
                WizardAction::ClearParticipantErrors => {
                    self.context.session().await.participant_errors.clear();
                }
                WizardAction::ShowVehicleErrors(errors) => {
                    self.context.session().await.vehicle_errors = errors;
                }
                WizardAction::ClearVehicleErrors => {
                    self.context.session().await.vehicle_errors = Default::default();
                }
                WizardAction::PopulateEventDays => {
                    self.context.session().await.store.populate_event_days();
                }
                WizardAction::SubmitRegistration => {
                    follow_up_events.push(self.submit().await?);
                }
                WizardAction::ResetDraft => {
                    self.context.session().await.reset();
                }
                WizardAction::RecordResponse(response) => {
                    self.context.session().await.store.record_response(response);
                }
                WizardAction::NavigateToConfirmation => {
                    info!("registration submitted, navigating to confirmation");
                }
                WizardAction::NotifySubmissionFailed { reason } => {
                    self.context.session().await.notice = Some(Notice {
                        kind: NoticeKind::SubmissionFailed,
                        message: reason.clone(),
                    });
                    self.wizard_event_port.emit_submission_failed(reason).await;
                }
            }
        }

        Ok(follow_up_events)
    }

    /// Runs one submission attempt. Only one may be outstanding at a time.
    async fn submit(&self) -> Result<WizardEvent, WizardError> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(WizardError::SubmissionInFlight);
        }
        let _busy = SubmittingGuard(&self.submitting);

        let draft = {
            let mut session = self.context.session().await;
            session.notice = None;
            session.store.draft().clone()
        };

        let event = match self.submit_registration.execute(&draft).await {
            Ok(response) => WizardEvent::SubmissionSucceeded { response },
            Err(err) => WizardEvent::SubmissionFailed {
                reason: err.to_string(),
            },
        };
        Ok(event)
    }

    async fn set_state_and_emit(&self, state: WizardState) {
        self.context.set_state(state.clone()).await;
        self.wizard_event_port.emit_wizard_state_changed(state).await;
    }
}
