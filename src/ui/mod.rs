pub mod app;
pub mod components;
pub mod header;
pub mod history;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod terminal_guard;
pub mod theme;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::config::{Config, DisplayConfig};
use crate::hotspot::{HistoryProvider, Hotspot, ReviewHistory};
use crate::sanitize::SanitizedRenderer;
use crate::sink::StoreSink;
use crate::store::HotspotStore;
use crate::ui::app::App;
use crate::ui::history::{entry_lines, plain_text};
use crate::ui::terminal_guard::setup_terminal;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Run the interactive review screen until the user quits.
///
/// Commits run in order on a background worker; outcomes are drained
/// between frames. Commits still queued at exit get a short grace period.
pub fn run(config: Config, store: HotspotStore) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("hotspot-commit")
        .enable_time()
        .build()?;
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let (sink, worker) = StoreSink::start(store.clone(), runtime.handle(), outcome_tx);
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config, store, sink);

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!("Review screen started");

    while app.is_running() {
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.on_commit_settled(outcome);
        }
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Paste(text) => app.on_paste(text),
                _ => {}
            }
        }
    }

    drop(terminal);
    drop(guard);
    // Dropping the app drops the last sink, letting the worker drain and stop.
    drop(app);
    match runtime.block_on(tokio::time::timeout(SHUTDOWN_GRACE, worker)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "Commit worker failed"),
        Err(_) => tracing::warn!("Pending commits abandoned at exit"),
    }
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("Review screen closed");
    Ok(())
}

/// Write the review history as plain text, one blank line between entries.
pub fn print_history(
    out: &mut impl Write,
    hotspot: &Hotspot,
    display: &DisplayConfig,
    sanitizer: &dyn SanitizedRenderer,
) -> io::Result<()> {
    writeln!(out, "{} [{}] {}", hotspot.key, hotspot.status, hotspot.message)?;
    for entry in ReviewHistory.history(hotspot) {
        writeln!(out)?;
        writeln!(out, "{}", plain_text(&entry_lines(&entry, display, sanitizer)))?;
    }
    Ok(())
}
