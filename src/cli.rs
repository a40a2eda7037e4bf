use std::path::PathBuf;

use clap::Parser;

/// Review a security hotspot's history and manage your comments on it.
#[derive(Debug, Parser)]
#[command(name = "hotspot-review", version)]
pub struct Args {
    /// Hotspot JSON file (as returned by the hotspot "show" endpoint)
    pub hotspot_file: PathBuf,

    /// Config file (default: <config dir>/hotspot-review/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the history to stdout instead of opening the review screen
    #[arg(long)]
    pub print: bool,
}
