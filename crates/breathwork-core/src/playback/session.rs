//! Session object owning one screen's playback state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::debug;

use crate::catalog::StateCatalog;
use crate::countdown::Countdown;
use crate::events::Event;
use crate::playback::queue::PlaybackQueue;
use crate::playback::task::StateTransitionTask;
use crate::sink::{CountdownDisplay, VisualSink};

const EVENT_CAPACITY: usize = 256;

/// Shared internals handed to tasks as a non-owning reference.
///
/// Tasks hold a `Weak` to this; the session is the only strong owner, so
/// tearing the session down degrades in-flight runs to no-ops.
pub(crate) struct SessionShared {
    pub(crate) sink: Arc<dyn VisualSink>,
    pub(crate) countdown: Mutex<Countdown>,
    pub(crate) events: broadcast::Sender<Event>,
}

impl SessionShared {
    pub(crate) fn new(
        sink: Arc<dyn VisualSink>,
        display: Arc<dyn CountdownDisplay>,
        events: broadcast::Sender<Event>,
    ) -> Self {
        Self {
            sink,
            countdown: Mutex::new(Countdown::new(display, events.clone())),
            events,
        }
    }
}

/// Composition root for one breathing screen.
///
/// Owns the catalog, the playback queue, the countdown and the sink
/// handles, and scopes them to an explicit start/stop lifecycle. Dropping
/// the session invalidates the weak references held by queued tasks.
pub struct BreathingSession {
    catalog: StateCatalog,
    shared: Arc<SessionShared>,
    queue: PlaybackQueue,
    current_run: Option<Arc<AtomicBool>>,
}

impl BreathingSession {
    pub fn new(
        catalog: StateCatalog,
        sink: Arc<dyn VisualSink>,
        display: Arc<dyn CountdownDisplay>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let shared = Arc::new(SessionShared::new(sink, display, events.clone()));
        Self {
            catalog,
            shared,
            queue: PlaybackQueue::new(events),
            current_run: None,
        }
    }

    /// Subscribe to playback and countdown events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.shared.events.subscribe()
    }

    pub fn catalog(&self) -> &StateCatalog {
        &self.catalog
    }

    /// True iff no run is pending or executing.
    pub fn is_idle(&self) -> bool {
        self.queue.is_idle()
    }

    /// Start one full playback of the catalog.
    ///
    /// Builds one transition task per catalog entry, in catalog order, and
    /// hands them to the queue. Ignored (returns `false`) while a run is
    /// still in flight.
    pub fn trigger(&mut self) -> bool {
        if !self.queue.is_idle() {
            debug!("trigger ignored: playback already in flight");
            return false;
        }
        let breathe_secs = self.catalog.breathe_duration() as u64;
        self.shared
            .countdown
            .lock()
            .unwrap()
            .set_pending_global(breathe_secs);

        let cancelled = Arc::new(AtomicBool::new(false));
        let tasks: Vec<StateTransitionTask> = self
            .catalog
            .states()
            .iter()
            .map(|state| {
                StateTransitionTask::new(
                    state.clone(),
                    Arc::downgrade(&self.shared),
                    Arc::clone(&cancelled),
                )
            })
            .collect();

        let _ = self.shared.events.send(Event::RunStarted {
            state_count: tasks.len(),
            breathe_duration_secs: breathe_secs,
            at: Utc::now(),
        });
        self.current_run = Some(cancelled);
        self.queue.enqueue_run(tasks);
        true
    }

    /// Cancel the run in flight.
    ///
    /// Cooperative: tasks not yet started finish as no-ops; a task already
    /// executing is awaited to natural completion. The countdown is stopped
    /// so a cancelled run leaves no ticker behind.
    pub fn cancel(&mut self) {
        if let Some(cancelled) = self.current_run.take() {
            cancelled.store(true, Ordering::SeqCst);
        }
        self.shared.countdown.lock().unwrap().stop();
    }
}
