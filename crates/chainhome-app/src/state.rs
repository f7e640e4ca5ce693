//! State shared between the control calls and the station loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use chainhome_core::commands::OperatorCommand;
use chainhome_core::state::StationSnapshot;

/// Commands sent from the control layer to the station loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the station engine.
    Operator(OperatorCommand),
    /// Shut down the station loop thread.
    Shutdown,
}

/// Shared runner state.
///
/// `mpsc::Sender` is wrapped in a `Mutex` so the whole state is `Sync` and
/// can sit behind a front end's shared handle.
pub struct AppState {
    /// `None` until the station is started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Updated by the station loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<StationSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
