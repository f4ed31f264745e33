use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use yr_app::usecases::wizard::VehicleField;
use yr_app::views::StepView;

use crate::answers::{has_visible_errors, RegistrationAnswers};
use crate::bootstrap::{apply_env_overrides, load_config, resolve_config_path, AppRuntime};
use crate::commands::{info as info_commands, wizard};

#[derive(Parser)]
#[command(name = "yatra-registration")]
#[command(about = "Yatra registration desk", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $YR_CONFIG, then ./registration.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print event details: dates, contact and hotels
    Info,
    /// Print the time left until the event starts
    Countdown,
    /// Replay an answers file and report validation errors without submitting
    Validate {
        /// Answers file (JSON)
        answers: PathBuf,
    },
    /// Replay an answers file and submit the registration
    Submit {
        /// Answers file (JSON)
        answers: PathBuf,
    },
}

/// What a command produced: a report to print and, for failures, the reason.
#[derive(Debug)]
pub enum Outcome {
    Done(serde_json::Value),
    Failed {
        report: serde_json::Value,
        reason: String,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config);
    let mut config = load_config(&config_path)?;
    apply_env_overrides(&mut config);
    let runtime = AppRuntime::new(&config)?;

    match execute(&runtime, cli.command).await? {
        Outcome::Done(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Outcome::Failed { report, reason } => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Err(anyhow!(reason))
        }
    }
}

pub async fn execute(runtime: &AppRuntime, command: Commands) -> Result<Outcome> {
    let span = info_span!("cli.execute", command = ?command);
    async {
        match command {
            Commands::Info => {
                let event = info_commands::get_event_info(runtime).map_err(|e| anyhow!(e))?;
                Ok(Outcome::Done(to_report(&event)?))
            }
            Commands::Countdown => {
                let countdown = info_commands::get_countdown(runtime).map_err(|e| anyhow!(e))?;
                Ok(Outcome::Done(to_report(&countdown)?))
            }
            Commands::Validate { answers } => {
                validate(runtime, &RegistrationAnswers::load(&answers)?).await
            }
            Commands::Submit { answers } => {
                submit(runtime, &RegistrationAnswers::load(&answers)?).await
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn validate(runtime: &AppRuntime, answers: &RegistrationAnswers) -> Result<Outcome> {
    let view = answers.replay_until_vehicle(runtime).await.map_err(|e| anyhow!(e))?;
    let view = if matches!(view.step, StepView::Vehicle(_)) {
        wizard::blur_vehicle_field(runtime, VehicleField::TransportType)
            .await
            .map_err(|e| anyhow!(e))?;
        wizard::blur_vehicle_field(runtime, VehicleField::AvailableSeats)
            .await
            .map_err(|e| anyhow!(e))?
    } else {
        view
    };

    let report = to_report(&view)?;
    if has_visible_errors(&view) {
        return Ok(Outcome::Failed {
            report,
            reason: "answers do not pass validation".to_string(),
        });
    }
    Ok(Outcome::Done(report))
}

pub async fn submit(runtime: &AppRuntime, answers: &RegistrationAnswers) -> Result<Outcome> {
    let view = answers.replay_until_vehicle(runtime).await.map_err(|e| anyhow!(e))?;
    if !matches!(view.step, StepView::Vehicle(_)) {
        return Ok(Outcome::Failed {
            report: to_report(&view)?,
            reason: "answers do not pass validation".to_string(),
        });
    }

    let view = wizard::next_step(runtime).await.map_err(|e| anyhow!(e))?;
    match view.step {
        StepView::Confirmation(_) => {
            let confirmation = wizard::enter_confirmation(runtime)
                .await
                .map_err(|e| anyhow!(e))?
                .context("registration accepted but no response was recorded")?;
            info!(members = confirmation.members.len(), "registration confirmed");
            Ok(Outcome::Done(to_report(&confirmation)?))
        }
        _ => {
            let reason = view
                .notice
                .as_ref()
                .map(|notice| notice.message.clone())
                .unwrap_or_else(|| "answers do not pass validation".to_string());
            Ok(Outcome::Failed {
                report: to_report(&view)?,
                reason,
            })
        }
    }
}

fn to_report<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).context("Failed to serialize command output")
}
