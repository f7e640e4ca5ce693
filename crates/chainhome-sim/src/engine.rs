//! Station engine: the controller that owns all mutable station state.
//!
//! `StationEngine` processes operator commands, runs the sweep, motion and
//! interference timers, and produces `StationSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use chainhome_core::commands::OperatorCommand;
use chainhome_core::config::StationConfig;
use chainhome_core::constants::*;
use chainhome_core::enums::StationMode;
use chainhome_core::error::{ConfigError, SignalError};
use chainhome_core::state::{AScopeView, StationControls, StationSnapshot};
use chainhome_core::types::{
    check_angle, check_time_step, clamp_elevation, normalize_bearing, SimTime, Target,
};

use crate::systems;
use crate::systems::ascope::PhosphorBuffer;
use crate::targets;

/// Configuration for starting a station run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
    pub station: StationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            station: StationConfig::default(),
        }
    }
}

/// The station engine. Owns the target collection and all timers.
pub struct StationEngine {
    config: StationConfig,
    powered: bool,
    controls: StationControls,
    targets: Vec<Target>,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<OperatorCommand>,

    sweep_elapsed: f64,
    motion_accumulator: f64,
    interference_timer: f64,
    interference: f64,
    phosphor: PhosphorBuffer,
}

impl StationEngine {
    /// Create a powered-on station. Fails if the station config is invalid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.station.validate()?;
        let controls = StationControls {
            frequency: config.station.default_frequency()?,
            ..Default::default()
        };

        let mut engine = Self {
            config: config.station,
            powered: false,
            controls,
            targets: Vec::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            sweep_elapsed: 0.0,
            motion_accumulator: 0.0,
            interference_timer: 0.0,
            interference: 0.0,
            phosphor: PhosphorBuffer::default(),
        };
        engine.power_on();
        Ok(engine)
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the station by `dt` seconds and return the resulting snapshot.
    ///
    /// A negative or non-finite `dt` is logged and treated as zero; spans
    /// longer than `MAX_TICK_SECS` are truncated.
    pub fn tick(&mut self, dt: f64) -> StationSnapshot {
        self.process_commands();

        let dt = match check_time_step(dt) {
            Ok(dt) if dt > MAX_TICK_SECS => {
                warn!(dt, max = MAX_TICK_SECS, "tick truncated");
                MAX_TICK_SECS
            }
            Ok(dt) => dt,
            Err(err) => {
                warn!(%err, "tick time step rejected");
                0.0
            }
        };
        if self.powered {
            self.advance_sweep(dt);
            self.advance_motion(dt);
            self.advance_interference(dt);
            self.time.advance(dt);
        }

        self.build_snapshot()
    }

    /// Apply a command immediately. Invalid commands leave state unchanged.
    pub fn apply_command(&mut self, command: OperatorCommand) -> Result<(), SignalError> {
        match command {
            OperatorCommand::SetPower { on } => {
                if on && !self.powered {
                    self.power_on();
                } else if !on && self.powered {
                    self.power_off();
                }
            }
            OperatorCommand::SetFrequency { mhz } => {
                self.controls.frequency = self.config.frequency(mhz)?;
                debug!(mhz, "frequency selected");
            }
            OperatorCommand::SetGoniometer { degrees } => {
                self.controls.goniometer_deg = normalize_bearing(check_angle(degrees)?);
            }
            OperatorCommand::SetVerticalGoniometer { degrees } => {
                self.controls.vertical_goniometer_deg = clamp_elevation(check_angle(degrees)?);
            }
            OperatorCommand::SetHeightFinding { enabled } => {
                self.controls.mode = if enabled {
                    StationMode::HeightFinding
                } else {
                    StationMode::RangeFinding
                };
            }
            OperatorCommand::SetAnalysisVisible { visible } => {
                self.controls.show_analysis = visible;
            }
        }
        Ok(())
    }

    pub fn powered(&self) -> bool {
        self.powered
    }

    pub fn controls(&self) -> StationControls {
        self.controls
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn interference(&self) -> f64 {
        self.interference
    }

    /// Replace the target collection (for tests needing a fixed scenario).
    #[cfg(test)]
    pub fn set_targets(&mut self, targets: Vec<Target>) {
        self.targets = targets;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command.clone()) {
                warn!(?command, %err, "operator command rejected");
            }
        }
    }

    fn power_on(&mut self) {
        self.powered = true;
        self.time = SimTime::default();
        self.sweep_elapsed = 0.0;
        self.motion_accumulator = 0.0;
        self.interference_timer = 0.0;
        self.phosphor.clear();
        self.targets = targets::seed_population(&mut self.rng, &self.config);
        self.interference = systems::interference::level(self.controls.frequency, &mut self.rng);
        info!(raids = self.targets.len(), "station powered on");
        for target in &self.targets {
            debug!(
                id = target.id,
                aircraft = %target.aircraft_type,
                range = target.range(),
                "raid plotted"
            );
        }
    }

    fn power_off(&mut self) {
        self.powered = false;
        self.targets = Vec::new();
        self.sweep_elapsed = 0.0;
        self.motion_accumulator = 0.0;
        self.interference_timer = 0.0;
        self.interference = 0.0;
        self.phosphor.clear();
        info!("station powered off");
    }

    /// Sweep column for the current sweep progress.
    fn sweep_position(&self) -> f64 {
        if !self.powered {
            return 0.0;
        }
        (self.sweep_elapsed / SWEEP_DURATION_SECS).min(1.0) * SWEEP_WIDTH as f64
    }

    /// Advance the sweep timer. A completed sweep is stored for persistence
    /// and a new one starts.
    fn advance_sweep(&mut self, dt: f64) {
        self.sweep_elapsed += dt;
        while self.sweep_elapsed >= SWEEP_DURATION_SECS {
            let completed = systems::ascope::build_trace(
                &self.targets,
                self.controls.goniometer_deg,
                self.controls.frequency,
                SWEEP_WIDTH as f64,
                &mut self.rng,
            );
            self.sweep_elapsed -= SWEEP_DURATION_SECS;
            let completed_at = self.time.elapsed_secs + dt - self.sweep_elapsed;
            self.phosphor.push(completed, completed_at);
            trace!(completed_at, "sweep completed");
        }
    }

    /// Run the motion timer at its fixed step, catching up if `dt` spans
    /// several steps.
    fn advance_motion(&mut self, dt: f64) {
        self.motion_accumulator += dt;
        while self.motion_accumulator >= MOTION_DT {
            self.motion_accumulator -= MOTION_DT;
            self.motion_step();
        }
    }

    fn motion_step(&mut self) {
        let before = self.targets.len();
        match targets::update_targets(&self.targets, MOTION_DT) {
            Ok(next) => self.targets = next,
            Err(err) => {
                warn!(%err, "motion step skipped");
                return;
            }
        }
        if self.targets.len() < before {
            debug!(removed = before - self.targets.len(), "raids passed overhead");
        }

        if self.targets.len() < self.config.min_targets
            && self.rng.gen_bool(self.config.spawn_probability)
        {
            let target = targets::spawn_random_target(&mut self.rng, &self.config);
            debug!(
                id = target.id,
                aircraft = %target.aircraft_type,
                range = target.range(),
                "new raid plotted"
            );
            let mut next = self.targets.clone();
            next.push(target);
            self.targets = next;
        }
    }

    fn advance_interference(&mut self, dt: f64) {
        self.interference_timer += dt;
        while self.interference_timer >= INTERFERENCE_INTERVAL_SECS {
            self.interference_timer -= INTERFERENCE_INTERVAL_SECS;
            self.interference =
                systems::interference::level(self.controls.frequency, &mut self.rng);
            trace!(level = self.interference, "interference refreshed");
        }
    }

    fn build_snapshot(&mut self) -> StationSnapshot {
        let sweep_position = self.sweep_position();
        let ascope = if self.powered {
            AScopeView {
                current: systems::ascope::build_trace(
                    &self.targets,
                    self.controls.goniometer_deg,
                    self.controls.frequency,
                    sweep_position,
                    &mut self.rng,
                ),
                previous: self.phosphor.traces(),
                previous_opacity: self.phosphor.opacities(),
            }
        } else {
            AScopeView::default()
        };
        let height_trace = if self.powered {
            systems::height_display::build_view(&self.targets, &self.controls, &mut self.rng)
        } else {
            None
        };
        let report = self
            .controls
            .show_analysis
            .then(|| systems::analysis::build_report(&self.targets, &self.controls));

        StationSnapshot {
            time: self.time,
            powered: self.powered,
            controls: self.controls,
            targets: self.targets.clone(),
            sweep_position,
            ascope,
            height_trace,
            plan: systems::plan_view::build(&self.targets, &self.controls),
            interference: self.interference,
            report,
        }
    }
}
