use std::path::PathBuf;

use breathwork_core::StateCatalog;
use clap::Args;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the state data file
    #[arg(long)]
    data: PathBuf,
}

/// Strict decode: unlike `play`, failures propagate instead of falling
/// back to the bookend-only catalog.
pub fn run(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = StateCatalog::try_load(&args.data)?;
    println!(
        "ok: {} states ({} loaded), breathe duration {}s",
        catalog.len(),
        catalog.len() - 2,
        catalog.breathe_duration()
    );
    Ok(())
}
