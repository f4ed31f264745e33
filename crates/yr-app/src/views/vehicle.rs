use serde::Serialize;
use yr_core::registration::TransportType;
use yr_core::validation::VehicleErrors;

use crate::usecases::wizard::WizardSession;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleStepView {
    pub transport_type: Option<TransportType>,
    pub has_empty_seats: bool,
    /// The "offer empty seats" toggle is shown for private vehicles only.
    pub show_seat_sharing: bool,
    pub show_seat_count: bool,
    pub available_seats: Option<i32>,
    pub errors: VehicleErrors,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

pub(super) fn render(session: &WizardSession, busy: bool) -> VehicleStepView {
    let draft = session.store.draft();

    VehicleStepView {
        transport_type: draft.transport_type,
        has_empty_seats: draft.vehicle.has_empty_seats,
        show_seat_sharing: draft.transport_type == Some(TransportType::Private),
        show_seat_count: draft.shares_private_seats(),
        available_seats: draft.vehicle.available_seats,
        errors: session.vehicle_errors.clone(),
        submit_label: if busy { "Submitting..." } else { "Submit registration" },
        submit_enabled: !busy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use yr_core::registration::{DraftStore, VehiclePatch};

    #[test]
    fn seat_controls_follow_transport_choice() {
        let mut session = WizardSession::new(DraftStore::new(Vec::<NaiveDate>::new()));

        let view = render(&session, false);
        assert!(!view.show_seat_sharing);
        assert!(!view.show_seat_count);

        session.store.set_transport_type(TransportType::Private);
        session.store.patch_vehicle(&VehiclePatch {
            has_empty_seats: Some(true),
            ..Default::default()
        });

        let view = render(&session, false);
        assert!(view.show_seat_sharing);
        assert!(view.show_seat_count);
        assert!(view.submit_enabled);
    }

    #[test]
    fn busy_disables_submit() {
        let session = WizardSession::new(DraftStore::new(Vec::<NaiveDate>::new()));

        let view = render(&session, true);

        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, "Submitting...");
    }
}
