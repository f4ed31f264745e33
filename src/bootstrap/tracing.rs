//! Tracing configuration for the registration desk.
//!
//! - **Environment filter**: `RUST_LOG` wins; otherwise debug in dev builds,
//!   info in release.
//! - **stderr**: human-readable records; stdout is reserved for command output.
//! - **File**: non-blocking writer in the platform log directory, when it can
//!   be created.
//! - **Sentry**: only when `SENTRY_DSN` is set.

use std::{fs, io, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const APP_DIR_NAME: &str = "yatra-registration";
const LOG_FILE_NAME: &str = "yatra-registration.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("yr_core={level}"),
        format!("yr_app={level}"),
        format!("yr_infra={level}"),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber. Call once, before any logging.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let sentry_layer = match std::env::var("SENTRY_DSN") {
        Ok(dsn) if !dsn.trim().is_empty() => {
            let guard = sentry::init((
                dsn,
                sentry::ClientOptions {
                    release: sentry::release_name!(),
                    traces_sample_rate: 1.0,
                    ..Default::default()
                },
            ));
            if SENTRY_GUARD.set(guard).is_err() {
                eprintln!("Sentry guard already initialized");
            }
            Some(sentry_tracing::layer())
        }
        _ => None,
    };

    let stderr_writer = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, using stderr only: {err:#}");
            None
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn logs_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("No local data directory on this platform")?;
    Ok(base.join(APP_DIR_NAME).join("logs"))
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = logs_dir()?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"yr_app=debug".to_string()));
        assert!(dev_directives.contains(&"reqwest=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"yr_infra=info".to_string()));
    }

    #[test]
    fn test_logs_dir_is_app_scoped() {
        if let Ok(dir) = logs_dir() {
            assert!(dir.ends_with("yatra-registration/logs"));
        }
    }
}
