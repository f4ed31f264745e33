pub mod events;
pub mod http;
pub mod time;

pub use events::TracingWizardEventPort;
pub use http::HttpRegistrationClient;
pub use time::SystemClock;
