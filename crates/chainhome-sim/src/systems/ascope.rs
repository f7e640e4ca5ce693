//! A-scope trace: echo amplitude against range along the current sweep.
//!
//! The trace runs left to right, one sample per column up to the sweep
//! position. A raid paints a peak when its range is within
//! `ASCOPE_PEAK_HALF_WIDTH_MI` of the column's range, scaled down linearly
//! with the range error. Completed sweeps are kept in a small persistence
//! buffer to mimic the fading phosphor of the CRT.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chainhome_core::constants::*;
use chainhome_core::state::{StoredTrace, TracePoint};
use chainhome_core::types::{Frequency, Target};

use crate::signal::signal_strength;

/// Row of the undeflected trace.
pub fn baseline() -> f64 {
    SCOPE_HEIGHT * 0.8
}

/// Range (miles) shown at a scope column.
pub fn column_range(column: f64) -> f64 {
    column / SWEEP_WIDTH as f64 * RADAR_RANGE
}

/// Strongest echo painted at `range` miles, given per-target (range, signal).
fn echo_at(range: f64, echoes: &[(f64, f64)]) -> f64 {
    echoes
        .iter()
        .filter_map(|&(target_range, signal)| {
            let diff = (target_range - range).abs();
            (diff < ASCOPE_PEAK_HALF_WIDTH_MI)
                .then(|| signal * (1.0 - diff / ASCOPE_PEAK_HALF_WIDTH_MI))
        })
        .fold(0.0, f64::max)
}

/// Sample the trace from column 0 up to `sweep_position`.
pub fn build_trace(
    targets: &[Target],
    goniometer_deg: f64,
    frequency: Frequency,
    sweep_position: f64,
    rng: &mut ChaCha8Rng,
) -> Vec<TracePoint> {
    let echoes: Vec<(f64, f64)> = targets
        .iter()
        .map(|t| (t.range(), signal_strength(t, goniometer_deg, frequency)))
        .collect();

    let base = baseline();
    let columns = sweep_position.clamp(0.0, SWEEP_WIDTH as f64).ceil() as usize;
    let mut trace = Vec::with_capacity(columns + 2);
    trace.push(TracePoint { x: 0.0, y: base });

    for column in 0..columns {
        let x = column as f64;
        let signal = echo_at(column_range(x), &echoes);
        let noise = (rng.gen::<f64>() - 0.5) * ASCOPE_NOISE;
        let deflection = signal * SCOPE_HEIGHT * ASCOPE_PEAK_GAIN;
        trace.push(TracePoint {
            x,
            y: base - deflection + noise,
        });
    }

    if sweep_position < SWEEP_WIDTH as f64 {
        trace.push(TracePoint {
            x: SWEEP_WIDTH as f64,
            y: base,
        });
    }
    trace
}

/// Faded copies of recent sweeps, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PhosphorBuffer {
    traces: VecDeque<StoredTrace>,
}

impl PhosphorBuffer {
    /// Keep a completed sweep, evicting the oldest beyond `MAX_PREVIOUS_TRACES`.
    pub fn push(&mut self, points: Vec<TracePoint>, completed_at_secs: f64) {
        self.traces.push_back(StoredTrace {
            points,
            completed_at_secs,
        });
        while self.traces.len() > MAX_PREVIOUS_TRACES {
            self.traces.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.traces.clear();
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn traces(&self) -> Vec<StoredTrace> {
        self.traces.iter().cloned().collect()
    }

    /// Fade opacity for each stored trace, same order as `traces`.
    pub fn opacities(&self) -> Vec<f64> {
        (0..self.traces.len())
            .map(|i| 0.3 * (1.0 - i as f64 / MAX_PREVIOUS_TRACES as f64))
            .collect()
    }
}
