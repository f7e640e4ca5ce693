//! Core types and definitions for the Chain Home station simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! targets, aircraft types, operator commands, station snapshots, errors,
//! configuration and constants. It has no scheduling or runtime code.

pub mod aircraft;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
