//! # Application runtime
//!
//! Owns the wired ports and the single wizard orchestrator. Commands reach
//! use cases through `runtime.usecases().xxx()`.

use std::sync::Arc;

use yr_app::usecases::{GetCountdown, GetEventInfo, SubmitRegistration, WizardOrchestrator};
use yr_core::config::AppConfig;
use yr_core::event::EventInfo;
use yr_core::ports::{ClockPort, RegistrationSubmissionPort, WizardEventPort};
use yr_infra::{HttpRegistrationClient, SystemClock, TracingWizardEventPort};

/// Ports the runtime is assembled from.
pub struct RuntimePorts {
    pub submission: Arc<dyn RegistrationSubmissionPort>,
    pub clock: Arc<dyn ClockPort>,
    pub wizard_events: Arc<dyn WizardEventPort>,
}

impl RuntimePorts {
    /// Production adapters: HTTP submission, system clock, tracing events.
    pub fn production(config: &AppConfig) -> anyhow::Result<Self> {
        let client = HttpRegistrationClient::new(&config.api)?;
        tracing::debug!(url = client.url(), "registration client ready");
        Ok(Self {
            submission: Arc::new(client),
            clock: Arc::new(SystemClock),
            wizard_events: Arc::new(TracingWizardEventPort),
        })
    }
}

pub struct AppRuntime {
    event: Arc<EventInfo>,
    clock: Arc<dyn ClockPort>,
    wizard_orchestrator: Arc<WizardOrchestrator>,
}

impl AppRuntime {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::with_ports(config, RuntimePorts::production(config)?))
    }

    pub fn with_ports(config: &AppConfig, ports: RuntimePorts) -> Self {
        let event = Arc::new(config.event_info());
        let submit_registration = Arc::new(SubmitRegistration::new(
            ports.submission,
            event.clone(),
        ));
        let wizard_orchestrator = Arc::new(WizardOrchestrator::new(
            event.clone(),
            submit_registration,
            ports.wizard_events,
        ));
        Self {
            event,
            clock: ports.clock,
            wizard_orchestrator,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor; constructs stateless use cases on demand.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn get_event_info(&self) -> GetEventInfo {
        GetEventInfo::new(self.runtime.event.clone())
    }

    pub fn get_countdown(&self) -> GetCountdown {
        GetCountdown::new(self.runtime.clock.clone(), self.runtime.event.clone())
    }

    pub fn wizard_orchestrator(&self) -> Arc<WizardOrchestrator> {
        self.runtime.wizard_orchestrator.clone()
    }
}
