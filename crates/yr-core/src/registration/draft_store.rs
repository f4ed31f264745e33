//! Registration draft store.
//!
//! Single source of truth for the in-progress registration. Every mutation is
//! one of the named operations below; callers never write draft fields
//! directly. All operations are synchronous and total: an index or date that
//! does not exist is a no-op (traced at `warn`), never an error.

use chrono::NaiveDate;
use tracing::warn;

use super::model::{
    DayPreference, Participant, RegistrationDraft, RegistrationType, TransportType,
};
use super::patch::{DayPreferencePatch, ParticipantPatch, VehiclePatch};
use super::response::RegistrationResponse;

#[derive(Debug, Clone)]
pub struct DraftStore {
    draft: RegistrationDraft,
    /// Event day dates; `set_day_preference` only accepts these keys.
    event_dates: Vec<NaiveDate>,
}

impl DraftStore {
    pub fn new(event_dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut event_dates: Vec<NaiveDate> = event_dates.into_iter().collect();
        event_dates.sort();
        event_dates.dedup();
        Self {
            draft: RegistrationDraft::initial(),
            event_dates,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Event day dates, ascending.
    pub fn event_dates(&self) -> &[NaiveDate] {
        &self.event_dates
    }

    pub fn set_registration_type(&mut self, registration_type: RegistrationType) {
        self.draft.registration_type = registration_type;
    }

    pub fn patch_participant(&mut self, index: usize, patch: &ParticipantPatch) {
        match self.draft.participants.get_mut(index) {
            Some(participant) => patch.apply(participant),
            None => warn!(
                index,
                participants = self.draft.participants.len(),
                "patch_participant ignored: index out of range"
            ),
        }
    }

    /// Appends an empty participant and returns its index.
    pub fn add_participant(&mut self) -> usize {
        self.draft.participants.push(Participant::default());
        self.draft.participants.len() - 1
    }

    /// Removes a participant. The primary contact (index 0) and the last
    /// remaining participant are never removed.
    pub fn remove_participant(&mut self, index: usize) {
        let count = self.draft.participants.len();
        if index == 0 || index >= count || count <= 1 {
            warn!(index, participants = count, "remove_participant ignored");
            return;
        }
        self.draft.participants.remove(index);
    }

    /// Sets the transport type. Public transport discards any vehicle
    /// sharing state.
    pub fn set_transport_type(&mut self, transport_type: TransportType) {
        self.draft.transport_type = Some(transport_type);
        if transport_type == TransportType::Public {
            self.draft.vehicle.has_empty_seats = false;
            self.draft.vehicle.available_seats = None;
        }
    }

    pub fn patch_vehicle(&mut self, patch: &VehiclePatch) {
        patch.apply(&mut self.draft.vehicle);
        if !self.draft.shares_private_seats() {
            self.draft.vehicle.available_seats = None;
        }
    }

    /// Merges into the preference for `date`, creating it with defaults when
    /// absent. Dates outside the event schedule are ignored.
    pub fn set_day_preference(&mut self, date: NaiveDate, patch: &DayPreferencePatch) {
        if !self.event_dates.contains(&date) {
            warn!(%date, "set_day_preference ignored: not an event day");
            return;
        }
        let day = self.draft.preferences_by_date.entry(date).or_default();
        patch.apply(day);
    }

    /// Creates default preferences for every event day that has none yet.
    pub fn populate_event_days(&mut self) {
        for date in &self.event_dates {
            self.draft
                .preferences_by_date
                .entry(*date)
                .or_insert_with(DayPreference::default);
        }
    }

    pub fn record_response(&mut self, response: RegistrationResponse) {
        self.draft.registration_response = Some(response);
    }

    pub fn reset_draft(&mut self) {
        self.draft = RegistrationDraft::initial();
    }
}
