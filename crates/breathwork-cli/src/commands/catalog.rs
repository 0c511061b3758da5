use std::path::PathBuf;

use breathwork_core::StateCatalog;
use clap::Args;
use serde_json::json;

#[derive(Args)]
pub struct CatalogArgs {
    /// Path to the state data file
    #[arg(long, default_value = "data/data.json")]
    data: PathBuf,
}

pub fn run(args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = StateCatalog::load(&args.data);
    let out = json!({
        "states": catalog.states(),
        "breathe_duration": catalog.breathe_duration(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
