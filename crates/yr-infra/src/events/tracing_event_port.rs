use async_trait::async_trait;
use tracing::{info, warn};
use yr_core::ports::WizardEventPort;
use yr_core::wizard::WizardState;

/// Wizard event sink for headless surfaces (CLI, tests): every event becomes
/// a structured log record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWizardEventPort;

#[async_trait]
impl WizardEventPort for TracingWizardEventPort {
    async fn emit_wizard_state_changed(&self, state: WizardState) {
        info!(
            target: "yr::wizard",
            step = state.step_index(),
            state = ?state,
            "wizard state changed"
        );
    }

    async fn emit_submission_failed(&self, reason: String) {
        warn!(target: "yr::wizard", %reason, "registration submission failed");
    }
}
