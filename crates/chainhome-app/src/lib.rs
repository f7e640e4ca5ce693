//! Chain Home station runner.
//!
//! Runs the station engine on its own thread at the sweep-timer rate and
//! exposes start, command and snapshot calls to whatever front end drives it.

pub mod control;
pub mod error;
pub mod state;
pub mod station_loop;

pub use chainhome_core as core;
