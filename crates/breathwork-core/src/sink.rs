//! Capabilities consumed by the playback engine.
//!
//! The engine renders nothing itself. It drives a [`VisualSink`]
//! (background color, title, scale animation, bare delay) and a
//! [`CountdownDisplay`] (two text slots), both provided by the front-end.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::color::Rgb;

/// Completion handle for an asynchronous sink operation.
///
/// The sink fires it exactly once, when the animation or delay finishes.
/// Dropping the handle unfired is indistinguishable from an animation that
/// never completes: the waiting task, and with it the whole queue, stalls.
#[derive(Debug)]
pub struct Completion(oneshot::Sender<()>);

impl Completion {
    pub fn fire(self) {
        let _ = self.0.send(());
    }
}

/// Awaitable half of a [`Completion`].
#[derive(Debug)]
pub struct CompletionWaiter(oneshot::Receiver<()>);

impl CompletionWaiter {
    /// Resolves when the paired handle fires. Never resolves if the handle
    /// was dropped unfired.
    pub async fn wait(self) {
        if self.0.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Create a paired completion handle and waiter.
pub fn completion() -> (Completion, CompletionWaiter) {
    let (tx, rx) = oneshot::channel();
    (Completion(tx), CompletionWaiter(rx))
}

/// Visual surface the playback engine drives.
pub trait VisualSink: Send + Sync {
    /// Applied immediately, not animated.
    fn set_background(&self, color: Rgb);

    fn set_title(&self, title: &str);

    /// Animate the scale property to `to` over `over`; fire `done` when
    /// the animation finishes.
    fn animate_scale(&self, to: f64, over: Duration, done: Completion);

    /// Fire `done` after `over` elapses. No visual change.
    fn delay(&self, over: Duration, done: Completion);
}

/// Two-slot text display for the countdown.
pub trait CountdownDisplay: Send + Sync {
    fn set_local_text(&self, text: &str);
    fn set_global_text(&self, text: &str);
}
