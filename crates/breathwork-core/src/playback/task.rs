//! One state's visual transition, driven to completion by the queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;

use crate::events::Event;
use crate::playback::session::SessionShared;
use crate::sink::completion;
use crate::state::{State, StateKind};

/// Lifecycle of a [`StateTransitionTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    Ready,
    Executing,
    Finished,
}

/// Unit of work wrapping one [`State`].
///
/// Holds a non-owning handle to the session internals: if the owning
/// session is torn down before this task runs, the task finishes without
/// side effects instead of touching freed state.
pub struct StateTransitionTask {
    state: State,
    session: Weak<SessionShared>,
    cancelled: Arc<AtomicBool>,
    phase: TaskPhase,
}

impl StateTransitionTask {
    pub(crate) fn new(
        state: State,
        session: Weak<SessionShared>,
        cancelled: Arc<AtomicBool>,
    ) -> Self {
        Self {
            state,
            session,
            cancelled,
            phase: TaskPhase::Ready,
        }
    }

    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Drive the transition to completion.
    ///
    /// Cancellation is checked only here, before any side effect; once the
    /// transition is in flight it is awaited to natural completion. The
    /// sink is trusted to eventually fire every completion it is handed --
    /// there is no timeout, so a sink that never calls back stalls the run.
    pub(crate) async fn run(&mut self) {
        if self.cancelled.load(Ordering::SeqCst) {
            self.phase = TaskPhase::Finished;
            return;
        }
        let Some(session) = self.session.upgrade() else {
            self.phase = TaskPhase::Finished;
            return;
        };
        self.phase = TaskPhase::Executing;

        let kind = self.state.kind;
        let over = Duration::from_secs_f64(self.state.duration);

        session.sink.set_background(self.state.color);
        let _ = session.events.send(Event::StateEntered {
            kind,
            duration_secs: self.state.duration_secs(),
            at: Utc::now(),
        });

        {
            let mut countdown = session.countdown.lock().unwrap();
            countdown.set_local(self.state.duration_secs());
            if kind.is_breathe() && !countdown.is_running() {
                countdown.start();
            }
            if kind == StateKind::Default {
                countdown.stop();
            }
        }

        match kind {
            StateKind::Default => {
                // Title is cleared for the transition and restored once the
                // scale animation lands.
                session.sink.set_title("");
                if let Some(scale) = kind.scale() {
                    let (done, waiter) = completion();
                    session.sink.animate_scale(scale, over, done);
                    waiter.wait().await;
                }
                session.sink.set_title(kind.title());
            }
            StateKind::Initial | StateKind::Inhale | StateKind::Exhale => {
                session.sink.set_title(kind.title());
                if let Some(scale) = kind.scale() {
                    let (done, waiter) = completion();
                    session.sink.animate_scale(scale, over, done);
                    waiter.wait().await;
                }
            }
            StateKind::Hold => {
                // No scale change; the duration is a bare timed pause.
                session.sink.set_title(kind.title());
                let (done, waiter) = completion();
                session.sink.delay(over, done);
                waiter.wait().await;
            }
        }

        let _ = session.events.send(Event::StateCompleted { kind, at: Utc::now() });
        self.phase = TaskPhase::Finished;
    }
}
