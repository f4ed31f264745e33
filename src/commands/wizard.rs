//! Registration wizard commands.
//!
//! Every command returns the freshly rendered `WizardView` so the surface can
//! redraw from a single value.

use chrono::NaiveDate;
use tracing::{info_span, Instrument};
use yr_app::usecases::wizard::VehicleField;
use yr_app::views::{ConfirmationView, WizardView};
use yr_core::registration::{
    DayPreferencePatch, ParticipantPatch, RegistrationType, TransportType, VehiclePatch,
};

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;

pub async fn get_wizard_view(runtime: &AppRuntime) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.get_view");
    async { Ok(runtime.usecases().wizard_orchestrator().view().await) }
        .instrument(span)
        .await
}

pub async fn set_registration_type(
    runtime: &AppRuntime,
    registration_type: RegistrationType,
) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.set_registration_type", ?registration_type);
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.set_registration_type(registration_type).await)
    }
    .instrument(span)
    .await
}

pub async fn patch_participant(
    runtime: &AppRuntime,
    index: usize,
    patch: ParticipantPatch,
) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.patch_participant", index);
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.patch_participant(index, patch).await)
    }
    .instrument(span)
    .await
}

pub async fn add_participant(runtime: &AppRuntime) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.add_participant");
    async { Ok(runtime.usecases().wizard_orchestrator().add_participant().await) }
        .instrument(span)
        .await
}

pub async fn set_day_preference(
    runtime: &AppRuntime,
    date: NaiveDate,
    patch: DayPreferencePatch,
) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.set_day_preference", %date);
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.set_day_preference(date, patch).await)
    }
    .instrument(span)
    .await
}

pub async fn set_transport_type(
    runtime: &AppRuntime,
    transport_type: TransportType,
) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.set_transport_type", ?transport_type);
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.set_transport_type(transport_type).await)
    }
    .instrument(span)
    .await
}

pub async fn patch_vehicle(runtime: &AppRuntime, patch: VehiclePatch) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.patch_vehicle");
    async { Ok(runtime.usecases().wizard_orchestrator().patch_vehicle(patch).await) }
        .instrument(span)
        .await
}

pub async fn blur_vehicle_field(
    runtime: &AppRuntime,
    field: VehicleField,
) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.blur_vehicle_field", ?field);
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        Ok(orchestrator.blur_vehicle_field(field).await)
    }
    .instrument(span)
    .await
}

pub async fn reset_draft(runtime: &AppRuntime) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.reset_draft");
    async { Ok(runtime.usecases().wizard_orchestrator().reset_draft().await) }
        .instrument(span)
        .await
}

pub async fn next_step(runtime: &AppRuntime) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.next");
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        orchestrator.next().await.map_err(|e| map_err(e.into()))
    }
    .instrument(span)
    .await
}

pub async fn previous_step(runtime: &AppRuntime) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.back");
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        orchestrator.back().await.map_err(|e| map_err(e.into()))
    }
    .instrument(span)
    .await
}

pub async fn start_over(runtime: &AppRuntime) -> Result<WizardView, String> {
    let span = info_span!("command.wizard.start_over");
    async {
        let orchestrator = runtime.usecases().wizard_orchestrator();
        orchestrator.start_over().await.map_err(|e| map_err(e.into()))
    }
    .instrument(span)
    .await
}

/// Leaving the wizard for the confirmation page consumes the recorded
/// response; `None` means there is nothing to confirm.
pub async fn enter_confirmation(runtime: &AppRuntime) -> Result<Option<ConfirmationView>, String> {
    let span = info_span!("command.wizard.enter_confirmation");
    async { Ok(runtime.usecases().wizard_orchestrator().enter_confirmation().await) }
        .instrument(span)
        .await
}
