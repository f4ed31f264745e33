//! Informational page commands: event details and countdown.

use tracing::info_span;
use yr_core::event::{Countdown, EventInfo};

use crate::bootstrap::AppRuntime;

pub fn get_event_info(runtime: &AppRuntime) -> Result<EventInfo, String> {
    let _span = info_span!("command.info.get_event_info").entered();
    Ok(runtime.usecases().get_event_info().execute())
}

pub fn get_countdown(runtime: &AppRuntime) -> Result<Countdown, String> {
    let _span = info_span!("command.info.get_countdown").entered();
    Ok(runtime.usecases().get_countdown().execute())
}
