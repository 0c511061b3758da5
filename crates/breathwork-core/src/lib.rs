//! # Breathwork Core Library
//!
//! This library provides the playback engine for the Breathwork
//! breathing-exercise player. A session plays an ordered catalog of timed
//! states (inhale, exhale, hold, ...) strictly one at a time, driving a
//! front-end-provided visual sink while a concurrent one-second countdown
//! tracks time remaining in the current state and in the whole session.
//!
//! ## Architecture
//!
//! - **StateCatalog**: immutable, bookended playback order with a derived
//!   breathe duration, loaded once from a JSON data file
//! - **PlaybackQueue**: FIFO execution of transition tasks, at most one in
//!   flight; the next task starts only after the previous one's
//!   asynchronous completion signal
//! - **StateTransitionTask**: Ready/Executing/Finished unit of work that
//!   drives the visual sink for one state and coordinates the countdown
//! - **Countdown**: repeating one-second ticker over two saturating
//!   counters, formatted `mm:ss` for a two-slot display
//! - **BreathingSession**: composition root wiring catalog, queue,
//!   countdown and sinks into one start/stop lifecycle
//!
//! Ordering is guaranteed by a single driver future per run; countdown
//! ticks interleave with an executing task, but a second task never does.
//!
//! ## Key Components
//!
//! - [`BreathingSession`]: session object, trigger entry point
//! - [`StateCatalog`]: state data loading and derived totals
//! - [`VisualSink`] / [`CountdownDisplay`]: capabilities the front-end
//!   implements
//! - [`Event`]: broadcast stream of observable transitions

pub mod catalog;
pub mod color;
pub mod countdown;
pub mod error;
pub mod events;
pub mod playback;
pub mod sink;
pub mod state;

pub use catalog::StateCatalog;
pub use color::Rgb;
pub use countdown::{format_mmss, Countdown};
pub use error::{CatalogError, ColorError, CoreError, Result};
pub use events::Event;
pub use playback::{BreathingSession, PlaybackQueue, StateTransitionTask, TaskPhase};
pub use sink::{completion, Completion, CompletionWaiter, CountdownDisplay, VisualSink};
pub use state::{State, StateKind};
