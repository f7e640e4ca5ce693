//! Station loop thread: ticks the engine at the sweep-timer rate and
//! publishes the latest snapshot.
//!
//! Operator commands arrive over an `mpsc` channel and are queued on the
//! engine; they take effect at the next tick.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use chainhome_core::constants::{DT, TICK_RATE};
use chainhome_core::state::StationSnapshot;
use chainhome_sim::engine::{SimConfig, StationEngine};

use crate::error::AppError;
use crate::state::LoopCommand;

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Build the engine and run it on a named thread.
///
/// Config errors surface here, before any thread is started.
pub fn spawn_station_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<StationSnapshot>>>,
) -> Result<mpsc::Sender<LoopCommand>, AppError> {
    let engine = StationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("chainhome-station-loop".into())
        .spawn(move || {
            run_station_loop(engine, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Spawn)?;

    Ok(cmd_tx)
}

/// Runs until `Shutdown` or the sender is dropped.
fn run_station_loop(
    mut engine: StationEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<StationSnapshot>>,
) {
    info!("station loop started");
    let mut next_tick_time = Instant::now();

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(ticks = engine.time().tick, "station loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let snapshot = engine.tick(DT);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; resync instead of bursting ticks
            debug!(behind = ?(now - next_tick_time), "station loop resynced");
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainhome_core::commands::OperatorCommand;

    fn wait_for_snapshot(
        latest: &Mutex<Option<StationSnapshot>>,
        pred: impl Fn(&StationSnapshot) -> bool,
    ) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if pred(snap) {
                    return true;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_station_loop(SimConfig::default(), latest.clone()).unwrap();

        assert!(wait_for_snapshot(&latest, |s| s.powered && s.time.tick > 0));
        tx.send(LoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_loop_forwards_operator_commands() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_station_loop(SimConfig::default(), latest.clone()).unwrap();

        tx.send(LoopCommand::Operator(OperatorCommand::SetGoniometer {
            degrees: 190.0,
        }))
        .unwrap();
        tx.send(LoopCommand::Operator(OperatorCommand::SetPower { on: false }))
            .unwrap();

        assert!(wait_for_snapshot(&latest, |s| !s.powered
            && s.controls.goniometer_deg == 190.0
            && s.targets.is_empty()));
        tx.send(LoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_invalid_config_fails_before_spawn() {
        let mut config = SimConfig::default();
        config.station.frequencies_mhz.clear();
        let result = spawn_station_loop(config, Arc::new(Mutex::new(None)));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_snapshot_serialization_under_10ms() {
        let mut engine = StationEngine::new(SimConfig::default()).unwrap();
        for _ in 0..120 {
            engine.tick(DT);
        }

        let snapshot = engine.tick(DT);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(10),
            "Snapshot serialization took {:?}, should be <10ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
