//! Per-tick player intents

use serde::{Deserialize, Serialize};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Steer toward -x (wins over `move_right` if both are set)
    pub move_left: bool,
    /// Steer toward +x
    pub move_right: bool,
    /// Jump (ignored while airborne)
    pub jump: bool,
    /// Restart the run (only honored while the run is over)
    pub restart: bool,
}
