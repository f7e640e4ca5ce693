//! Display-data systems that read the target population each tick.
//!
//! Systems are pure functions over a target slice and the operator controls.
//! Only the scope and height traces draw noise from the station RNG.

pub mod analysis;
pub mod ascope;
pub mod height_display;
pub mod interference;
pub mod plan_view;
