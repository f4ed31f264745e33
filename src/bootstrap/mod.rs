pub mod config;
pub mod runtime;
pub mod tracing;

pub use config::{apply_env_overrides, load_config, resolve_config_path};
pub use runtime::{AppRuntime, RuntimePorts, UseCases};
