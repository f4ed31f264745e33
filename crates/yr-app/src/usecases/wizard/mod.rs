mod context;
mod orchestrator;

pub use context::{Notice, NoticeKind, WizardContext, WizardSession};
pub use orchestrator::{VehicleField, WizardError, WizardOrchestrator};
