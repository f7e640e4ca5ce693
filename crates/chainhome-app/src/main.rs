//! Headless station run.
//!
//! Usage: `chainhome [config.toml] [seconds]`
//!
//! Starts the station loop, shows the analysis panel, lets the station run
//! for the given wall-clock duration (default 5 s) and prints the final
//! analysis report as JSON.

use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chainhome_app::control;
use chainhome_app::error::AppError;
use chainhome_app::state::AppState;
use chainhome_core::commands::OperatorCommand;
use chainhome_core::config::StationConfig;
use chainhome_sim::engine::SimConfig;

const DEFAULT_RUN: Duration = Duration::from_secs(5);

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "station run failed");
            ExitCode::FAILURE
        }
    }
}

/// Parse the run length in seconds. Rejects anything a `Duration` cannot hold.
fn parse_run_duration(raw: Option<&str>) -> Result<Duration, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_RUN);
    };
    raw.parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| AppError::InvalidArgument(raw.to_string()))
}

fn run(args: Vec<String>) -> Result<(), AppError> {
    let station = match args.first() {
        Some(path) => {
            info!(path = %path, "loading station config");
            StationConfig::load(path)?
        }
        None => StationConfig::default(),
    };
    let run_for = parse_run_duration(args.get(1).map(String::as_str))?;

    let state = AppState::new();
    control::start_station(
        &state,
        SimConfig {
            station,
            ..Default::default()
        },
    )?;
    control::send_command(&state, OperatorCommand::SetAnalysisVisible { visible: true })?;

    std::thread::sleep(run_for);

    let snapshot = control::get_snapshot(&state)?;
    control::stop_station(&state)?;

    match snapshot.and_then(|s| s.report) {
        Some(report) => {
            info!(
                raids = report.summary.total_raids,
                aircraft = report.summary.aircraft_count,
                "final plot"
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        None => info!("no report produced"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_duration_default_and_valid() {
        assert_eq!(parse_run_duration(None).unwrap(), DEFAULT_RUN);
        assert_eq!(
            parse_run_duration(Some("2.5")).unwrap(),
            Duration::from_millis(2500)
        );
        assert_eq!(parse_run_duration(Some("0")).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_run_duration_rejects_bad_values() {
        for raw in ["1e300", "-1", "inf", "NaN", "soon"] {
            assert!(
                matches!(parse_run_duration(Some(raw)), Err(AppError::InvalidArgument(_))),
                "{raw} accepted"
            );
        }
    }
}
