//! Station simulation for the Chain Home RDF station.
//!
//! Holds the target and signal models, the display-data systems, and the
//! `StationEngine` that advances them and produces `StationSnapshot`s.

pub mod engine;
pub mod signal;
pub mod systems;
pub mod targets;

pub use chainhome_core as core;
pub use engine::{SimConfig, StationEngine};
