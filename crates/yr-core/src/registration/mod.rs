//! Registration domain module.
//!
//! Draft models, the draft store that owns them, and the projection that turns
//! a finished draft into a submission payload.

mod draft_store;
mod model;
mod patch;
mod payload;
mod response;

pub use draft_store::DraftStore;
pub use model::{
    DayPreference, Gender, Participant, RegistrationDraft, RegistrationType, ToiletPreference,
    TransportType, VehicleDetails,
};
pub use patch::{DayPreferencePatch, ParticipantPatch, VehiclePatch};
pub use payload::{
    build_submission_payload, DailyPreferencePayload, FloorPreference, MemberPayload,
    PayloadError, SubmissionPayload, SubmittedMemberStatus, GROUND_FLOOR_MIN_AGE,
};
pub use response::{MemberId, MemberStatus, RegisteredMember, RegistrationResponse};
