//! Per-second countdown over the current state and the whole session.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::events::Event;
use crate::sink::CountdownDisplay;

/// Format whole seconds as zero-padded `mm:ss`.
///
/// Minutes wrap at 60, matching the two-digit display slot.
pub fn format_mmss(total_secs: u64) -> String {
    format!("{:02}:{:02}", (total_secs / 60) % 60, total_secs % 60)
}

#[derive(Debug, Default)]
struct Counters {
    local_remaining: u64,
    global_remaining: u64,
    running: bool,
}

/// Repeating one-second ticker over two saturating counters.
///
/// `local` tracks the current state, `global` the whole session. Started on
/// the first breathe-kind state of a run, reset per state transition, and
/// stopped (with the display blanked) when the terminal Default state
/// begins. Counters never go below zero.
pub struct Countdown {
    counters: Arc<Mutex<Counters>>,
    display: Arc<dyn CountdownDisplay>,
    events: broadcast::Sender<Event>,
    ticker: Option<JoinHandle<()>>,
    pending_global: u64,
}

impl Countdown {
    pub fn new(display: Arc<dyn CountdownDisplay>, events: broadcast::Sender<Event>) -> Self {
        Self {
            counters: Arc::new(Mutex::new(Counters::default())),
            display,
            events,
            ticker: None,
            pending_global: 0,
        }
    }

    /// Stage the session total applied at the next [`start`](Self::start).
    pub fn set_pending_global(&mut self, secs: u64) {
        self.pending_global = secs;
    }

    /// Reset the per-state counter.
    pub fn set_local(&mut self, secs: u64) {
        self.counters.lock().unwrap().local_remaining = secs;
    }

    pub fn is_running(&self) -> bool {
        self.counters.lock().unwrap().running
    }

    pub fn local_remaining(&self) -> u64 {
        self.counters.lock().unwrap().local_remaining
    }

    pub fn global_remaining(&self) -> u64 {
        self.counters.lock().unwrap().global_remaining
    }

    /// Begin ticking. The staged global total becomes the session counter;
    /// the first decrement lands one second from now. No-op while already
    /// running.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        {
            let mut counters = self.counters.lock().unwrap();
            counters.global_remaining = self.pending_global;
            counters.running = true;
        }
        let _ = self.events.send(Event::CountdownStarted {
            global_secs: self.pending_global,
            at: Utc::now(),
        });

        let counters = Arc::clone(&self.counters);
        let display = Arc::clone(&self.display);
        let events = self.events.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the loop below starts
            // with the one-second-from-now tick.
            interval.tick().await;
            loop {
                interval.tick().await;
                let (local, global) = {
                    let mut counters = counters.lock().unwrap();
                    counters.local_remaining = counters.local_remaining.saturating_sub(1);
                    counters.global_remaining = counters.global_remaining.saturating_sub(1);
                    (counters.local_remaining, counters.global_remaining)
                };
                display.set_local_text(&format_mmss(local));
                display.set_global_text(&format!("Remaining\n{}", format_mmss(global)));
                let _ = events.send(Event::CountdownTick {
                    local_secs: local,
                    global_secs: global,
                    at: Utc::now(),
                });
            }
        }));
    }

    /// Cancel the tick and blank the display. Counters are left as-is.
    /// No-op if the countdown never started.
    pub fn stop(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        ticker.abort();
        self.counters.lock().unwrap().running = false;
        self.display.set_local_text("");
        self.display.set_global_text("");
        let _ = self.events.send(Event::CountdownStopped { at: Utc::now() });
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingDisplay {
        local: Mutex<Vec<String>>,
        global: Mutex<Vec<String>>,
    }

    impl CountdownDisplay for RecordingDisplay {
        fn set_local_text(&self, text: &str) {
            self.local.lock().unwrap().push(text.to_string());
        }
        fn set_global_text(&self, text: &str) {
            self.global.lock().unwrap().push(text.to_string());
        }
    }

    fn countdown() -> (Countdown, Arc<RecordingDisplay>) {
        let display = Arc::new(RecordingDisplay::default());
        let (events, _) = broadcast::channel(64);
        (Countdown::new(Arc::clone(&display) as _, events), display)
    }

    #[test]
    fn mmss_formatting() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(9), "00:09");
        assert_eq!(format_mmss(65), "01:05");
        assert_eq!(format_mmss(600), "10:00");
        assert_eq!(format_mmss(3599), "59:59");
        assert_eq!(format_mmss(3600), "00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_decrement_both_counters_by_one() {
        let (mut countdown, _display) = countdown();
        countdown.set_pending_global(3);
        countdown.set_local(2);
        countdown.start();
        assert!(countdown.is_running());
        assert_eq!(countdown.global_remaining(), 3);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(countdown.local_remaining(), 1);
        assert_eq!(countdown.global_remaining(), 2);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(countdown.local_remaining(), 0);
        assert_eq!(countdown.global_remaining(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn counters_saturate_at_zero() {
        let (mut countdown, _display) = countdown();
        countdown.set_pending_global(1);
        countdown.set_local(1);
        countdown.start();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(countdown.local_remaining(), 0);
        assert_eq!(countdown.global_remaining(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn display_receives_formatted_texts() {
        let (mut countdown, display) = countdown();
        countdown.set_pending_global(70);
        countdown.set_local(4);
        countdown.start();

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(display.local.lock().unwrap().last().unwrap(), "00:03");
        assert_eq!(
            display.global.lock().unwrap().last().unwrap(),
            "Remaining\n01:09"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stop_blanks_display_and_cancels_tick() {
        let (mut countdown, display) = countdown();
        countdown.set_pending_global(10);
        countdown.set_local(5);
        countdown.start();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        countdown.stop();
        assert!(!countdown.is_running());
        assert_eq!(display.local.lock().unwrap().last().unwrap(), "");
        assert_eq!(display.global.lock().unwrap().last().unwrap(), "");

        // No more ticks after stop.
        let before = display.local.lock().unwrap().len();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(display.local.lock().unwrap().len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_is_a_no_op() {
        let (mut countdown, _display) = countdown();
        countdown.set_pending_global(10);
        countdown.set_local(5);
        countdown.start();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        countdown.set_pending_global(99);
        countdown.start();
        assert_eq!(countdown.global_remaining(), 9);
    }

    #[test]
    fn stop_before_start_is_a_no_op() {
        let (mut countdown, display) = countdown();
        countdown.stop();
        assert!(display.local.lock().unwrap().is_empty());
    }
}
