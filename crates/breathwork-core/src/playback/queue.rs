//! FIFO execution of state transition tasks, one at a time.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::broadcast;

use crate::events::Event;
use crate::playback::task::StateTransitionTask;

#[derive(Debug, Default)]
struct QueueState {
    pending: usize,
    executing: bool,
}

/// Serializes state playback: at most one task in flight, strict FIFO.
///
/// Task N+1 never starts until task N's completion signal arrives -- not
/// merely its dispatch. The queue does not guard against enqueueing while
/// busy; that check belongs to the session driving it.
pub struct PlaybackQueue {
    state: Arc<Mutex<QueueState>>,
    events: broadcast::Sender<Event>,
}

impl PlaybackQueue {
    pub fn new(events: broadcast::Sender<Event>) -> Self {
        Self {
            state: Arc::new(Mutex::new(QueueState::default())),
            events,
        }
    }

    /// True iff no task is pending or executing.
    pub fn is_idle(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.pending == 0 && !state.executing
    }

    /// Append `tasks` in order and begin executing the first immediately.
    ///
    /// Returns as soon as the run is scheduled; completion is observable
    /// through [`is_idle`](Self::is_idle) and the `RunFinished` event.
    pub fn enqueue_run(&self, tasks: Vec<StateTransitionTask>) {
        if tasks.is_empty() {
            return;
        }
        self.state.lock().unwrap().pending = tasks.len();

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        tokio::spawn(async move {
            for mut task in tasks {
                {
                    let mut state = state.lock().unwrap();
                    state.pending -= 1;
                    state.executing = true;
                }
                task.run().await;
                state.lock().unwrap().executing = false;
            }
            let _ = events.send(Event::RunFinished { at: Utc::now() });
        });
    }
}
