//! Control calls a front end uses to drive the station loop.
//!
//! They bridge front-end requests to the station loop thread via channels.

use chainhome_core::commands::OperatorCommand;
use chainhome_core::state::StationSnapshot;
use chainhome_sim::engine::SimConfig;

use crate::error::AppError;
use crate::state::{AppState, LoopCommand};
use crate::station_loop;

/// Start the station loop. Fails if it is already running.
pub fn start_station(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let cmd_tx = station_loop::spawn_station_loop(config, state.latest_snapshot.clone())?;
    *state.command_tx.lock()? = Some(cmd_tx);
    *running = true;
    Ok(())
}

/// Forward an operator command to the station loop.
pub fn send_command(state: &AppState, command: OperatorCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;
    let tx = tx_lock.as_ref().ok_or(AppError::NotStarted)?;
    tx.send(LoopCommand::Operator(command))
        .map_err(|_| AppError::LoopStopped)
}

/// Latest snapshot, if the loop has ticked at least once.
pub fn get_snapshot(state: &AppState) -> Result<Option<StationSnapshot>, AppError> {
    Ok(state.latest_snapshot.lock()?.clone())
}

/// Stop the station loop. Stopping a station that never started is a no-op.
pub fn stop_station(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    if let Some(tx) = state.command_tx.lock()?.take() {
        // The loop may already be gone; nothing left to stop then.
        let _ = tx.send(LoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_until(state: &AppState, pred: impl Fn(&StationSnapshot) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Ok(Some(snap)) = get_snapshot(state) {
                if pred(&snap) {
                    return true;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_command_before_start_rejected() {
        let state = AppState::new();
        let result = send_command(&state, OperatorCommand::SetPower { on: true });
        assert!(matches!(result, Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_rejected() {
        let state = AppState::new();
        start_station(&state, SimConfig::default()).unwrap();
        assert!(matches!(
            start_station(&state, SimConfig::default()),
            Err(AppError::AlreadyRunning)
        ));
        stop_station(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_commands_reach_engine() {
        let state = AppState::new();
        start_station(&state, SimConfig::default()).unwrap();
        send_command(&state, OperatorCommand::SetFrequency { mhz: 30.0 }).unwrap();
        send_command(&state, OperatorCommand::SetAnalysisVisible { visible: true }).unwrap();

        assert!(wait_until(&state, |s| s.controls.frequency.mhz() == 30.0
            && s.report.is_some()));
        stop_station(&state).unwrap();
    }

    #[test]
    fn test_restart_after_stop() {
        let state = AppState::new();
        start_station(&state, SimConfig::default()).unwrap();
        stop_station(&state).unwrap();
        assert!(start_station(&state, SimConfig::default()).is_ok());
        stop_station(&state).unwrap();
    }
}
