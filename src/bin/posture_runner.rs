//! Posture Scenario Runner
//!
//! Runs a scripted unit through a sequence of posture commands and prints
//! the outcome of each step.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unit_posture::core::config::PostureConfig;
use unit_posture::scenario::{outcomes_to_json, Scenario, StepOutcome};
use unit_posture::unit::ProfileCatalog;

/// Posture Scenario Runner - step a unit through posture commands
#[derive(Parser, Debug)]
#[command(name = "posture_runner")]
#[command(about = "Run a scripted deployment posture scenario")]
struct Args {
    /// Scenario TOML file
    scenario: PathBuf,

    /// Posture tunables
    #[arg(long, default_value = "data/posture.toml")]
    config: PathBuf,

    /// Weapon-system profile catalog
    #[arg(long, default_value = "data/profiles.toml")]
    profiles: PathBuf,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = PostureConfig::load(&args.config).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config {:?}: {}; using defaults", args.config, e);
        PostureConfig::default()
    });

    let catalog = match ProfileCatalog::load(&args.profiles) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load profiles {:?}: {}", args.profiles, e);
            return ExitCode::FAILURE;
        }
    };

    let outcomes = match Scenario::load(&args.scenario).and_then(|s| s.run(&catalog, &config)) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            tracing::error!("Scenario {:?} failed: {}", args.scenario, e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Ran {} steps from {:?}", outcomes.len(), args.scenario);

    if args.format == "json" {
        match outcomes_to_json(&outcomes) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize outcomes: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(&outcomes);
    }

    ExitCode::SUCCESS
}

fn print_text(outcomes: &[StepOutcome]) {
    for outcome in outcomes {
        let verdict = match &outcome.reason {
            None => "ok".to_string(),
            Some(reason) => format!("refused: {}", reason),
        };
        println!(
            "[{}] {:?} -> {} ({}) movement {:.2}/{:.2} supply {:.2} actions {}",
            outcome.step,
            outcome.command,
            outcome.posture,
            verdict,
            outcome.movement,
            outcome.max_movement,
            outcome.supply,
            outcome.actions_remaining
        );
    }
}
