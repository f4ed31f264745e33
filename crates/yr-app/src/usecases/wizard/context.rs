use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use yr_core::registration::DraftStore;
use yr_core::validation::{ParticipantErrorMap, VehicleErrors};
use yr_core::wizard::WizardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    SubmissionFailed,
}

/// Transient, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Everything one registration attempt needs: the wizard step, the draft store
/// and the UI-side state (open panel, visible errors, notice). Errors live
/// here, never in the draft.
#[derive(Debug)]
pub struct WizardSession {
    pub state: WizardState,
    pub store: DraftStore,
    pub open_participant: usize,
    pub participant_errors: ParticipantErrorMap,
    pub vehicle_errors: VehicleErrors,
    pub notice: Option<Notice>,
}

impl WizardSession {
    pub fn new(store: DraftStore) -> Self {
        Self {
            state: WizardState::TypeAndPersonal,
            store,
            open_participant: 0,
            participant_errors: ParticipantErrorMap::new(),
            vehicle_errors: VehicleErrors::default(),
            notice: None,
        }
    }

    /// Clears the visible errors and panel selection along with the draft.
    pub fn reset(&mut self) {
        self.store.reset_draft();
        self.open_participant = 0;
        self.participant_errors.clear();
        self.vehicle_errors = VehicleErrors::default();
        self.notice = None;
    }

    /// Keeps error indices and the open panel aligned after a participant was
    /// removed at `removed`.
    pub fn shift_after_removal(&mut self, removed: usize) {
        let errors = std::mem::take(&mut self.participant_errors);
        self.participant_errors = errors
            .into_iter()
            .filter(|(index, _)| *index != removed)
            .map(|(index, errors)| {
                if index > removed {
                    (index - 1, errors)
                } else {
                    (index, errors)
                }
            })
            .collect();

        let last = self.store.draft().participants.len().saturating_sub(1);
        if self.open_participant > removed {
            self.open_participant -= 1;
        }
        self.open_participant = self.open_participant.min(last);
    }
}

/// Shared wizard context containing the session and the dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: held for a whole navigation dispatch (transition +
///   actions + state update) so navigations never interleave.
/// - `session`: held briefly for every read and every draft edit.
#[derive(Clone)]
pub struct WizardContext {
    session: Arc<Mutex<WizardSession>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new(store: DraftStore) -> Self {
        Self {
            session: Arc::new(Mutex::new(WizardSession::new(store))),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn session(&self) -> MutexGuard<'_, WizardSession> {
        self.session.lock().await
    }

    pub async fn get_state(&self) -> WizardState {
        self.session.lock().await.state.clone()
    }

    /// Acquires the dispatch lock. Returns a guard that releases it when dropped.
    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        self.session.lock().await.state = state;
    }
}
