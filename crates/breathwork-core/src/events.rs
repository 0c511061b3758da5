use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::StateKind;

/// Every externally observable transition produces an Event.
/// Front-ends subscribe to them through the session's broadcast channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    RunStarted {
        state_count: usize,
        breathe_duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateEntered {
        kind: StateKind,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateCompleted {
        kind: StateKind,
        at: DateTime<Utc>,
    },
    RunFinished {
        at: DateTime<Utc>,
    },
    /// First breathe-kind state of the run began ticking.
    CountdownStarted {
        global_secs: u64,
        at: DateTime<Utc>,
    },
    CountdownTick {
        local_secs: u64,
        global_secs: u64,
        at: DateTime<Utc>,
    },
    /// Terminal state reached; the countdown display is blanked.
    CountdownStopped {
        at: DateTime<Utc>,
    },
}
