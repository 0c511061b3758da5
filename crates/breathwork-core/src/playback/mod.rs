mod queue;
mod session;
mod task;

pub use queue::PlaybackQueue;
pub use session::BreathingSession;
pub use task::{StateTransitionTask, TaskPhase};
