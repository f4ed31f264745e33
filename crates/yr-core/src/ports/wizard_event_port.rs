use crate::wizard::WizardState;

/// Notifies the presentation layer about wizard state changes.
#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, state: WizardState);

    /// A recoverable submission failure the user can dismiss and retry.
    async fn emit_submission_failed(&self, reason: String);
}
