use std::path::PathBuf;
use std::sync::Arc;

use breathwork_core::{BreathingSession, Event, StateCatalog};
use clap::Args;
use tokio::sync::broadcast::error::RecvError;

use crate::render::{TerminalCountdown, TerminalSink};

#[derive(Args)]
pub struct PlayArgs {
    /// Path to the state data file
    #[arg(long, default_value = "data/data.json")]
    data: PathBuf,
    /// Speed factor applied to animations and delays (2.0 = twice as fast)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(play(args))
}

async fn play(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = StateCatalog::load(&args.data);
    println!(
        "{} states, breathe duration {}s",
        catalog.len(),
        catalog.breathe_duration()
    );

    let mut session = BreathingSession::new(
        catalog,
        Arc::new(TerminalSink::new(args.speed)),
        Arc::new(TerminalCountdown),
    );
    let mut events = session.subscribe();
    session.trigger();

    loop {
        match events.recv().await {
            Ok(Event::RunFinished { .. }) => break,
            Ok(_) => {}
            Err(RecvError::Closed) => break,
            Err(RecvError::Lagged(_)) => {}
        }
    }
    println!("done");
    Ok(())
}
