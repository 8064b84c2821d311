//! Binary entry point that glues the SQLite-backed record stores to the TUI.
//! The pipeline is short: resolve the per-user database path, create the
//! schema if this is a first run, and drive the Ratatui event loop until the
//! user exits.
use schooldesk::{run_app, App, Database};

/// Initialize persistence and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// an unwritable home directory) to the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let db = Database::open_default()?;
    let mut app = App::new(db);
    run_app(&mut app)
}
