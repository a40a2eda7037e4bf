use anyhow::Context;
use clap::Parser;

use hotspot_review::cli::Args;
use hotspot_review::config::Config;
use hotspot_review::sanitize::TerminalSanitizer;
use hotspot_review::store::HotspotStore;
use hotspot_review::{logging, ui};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let store = HotspotStore::open(&args.hotspot_file)
        .with_context(|| format!("opening {}", args.hotspot_file.display()))?;

    if args.print {
        let mut stdout = std::io::stdout().lock();
        ui::print_history(&mut stdout, &store.snapshot(), &config.display, &TerminalSanitizer)?;
        return Ok(());
    }

    ui::run(config, store)?;
    Ok(())
}
