//! Answers files: a whole registration written down as JSON.
//!
//! An answers file is replayed through the same wizard commands a form would
//! call, one field group and one navigation at a time. It never writes the
//! draft directly, so every gate and validation rule applies.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};
use yr_app::views::{StepView, WizardView};
use yr_core::registration::{
    DayPreferencePatch, ParticipantPatch, RegistrationType, TransportType, VehiclePatch,
};

use crate::bootstrap::AppRuntime;
use crate::commands::wizard;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationAnswers {
    pub registration_type: RegistrationType,
    /// Index 0 is the primary contact.
    pub participants: Vec<ParticipantPatch>,
    pub days: BTreeMap<NaiveDate, DayPreferencePatch>,
    pub transport_type: Option<TransportType>,
    pub vehicle: VehiclePatch,
}

impl RegistrationAnswers {
    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Failed to parse answers as JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid answers file: {}", path.display()))
    }

    /// Fills the draft and walks the wizard up to the vehicle step.
    ///
    /// The wizard is first rewound to the opening step, so a runtime left on
    /// a later step by an earlier replay (for example after a rejected
    /// submission) replays from scratch. Stops early on the first step when a
    /// participant fails validation; the returned view then carries the
    /// visible errors.
    pub async fn replay_until_vehicle(&self, runtime: &AppRuntime) -> Result<WizardView, String> {
        rewind_to_first_step(runtime).await?;
        wizard::reset_draft(runtime).await?;
        wizard::set_registration_type(runtime, self.registration_type).await?;

        for (index, patch) in self.participants.iter().enumerate() {
            if index > 0 {
                wizard::add_participant(runtime).await?;
            }
            wizard::patch_participant(runtime, index, patch.clone()).await?;
        }

        let mut view = wizard::next_step(runtime).await?;
        if !matches!(view.step, StepView::Preferences(_)) {
            debug!("answers stopped at participant details");
            return Ok(view);
        }

        for (date, patch) in &self.days {
            wizard::set_day_preference(runtime, *date, patch.clone()).await?;
        }
        while matches!(view.step, StepView::Preferences(_)) {
            view = wizard::next_step(runtime).await?;
        }

        if let Some(transport_type) = self.transport_type {
            wizard::set_transport_type(runtime, transport_type).await?;
        }
        view = wizard::patch_vehicle(runtime, self.vehicle.clone()).await?;
        info!(step = view.step_index, "answers replayed");
        Ok(view)
    }
}

/// Navigates back until the wizard shows the opening step. A finished
/// registration is left through `start_over`.
async fn rewind_to_first_step(runtime: &AppRuntime) -> Result<(), String> {
    let mut view = wizard::get_wizard_view(runtime).await?;
    while view.step_index > 0 {
        debug!(step = view.step_index, "rewinding wizard");
        view = match view.step {
            StepView::Confirmation(_) => wizard::start_over(runtime).await?,
            _ => wizard::previous_step(runtime).await?,
        };
    }
    Ok(())
}

/// Whether the view shows any inline field error.
pub fn has_visible_errors(view: &WizardView) -> bool {
    match &view.step {
        StepView::TypeAndPersonal(step) => step.participants.iter().any(|card| !card.errors.is_empty()),
        StepView::Vehicle(step) => !step.errors.is_empty(),
        StepView::Preferences(_) | StepView::Confirmation(_) => false,
    }
}
