//! Booking session command handler.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use airlink_cli::output::OutputFormat;
use airlink_cli::session::{load_script, run_session};
use airlink_lib::{FlightGraph, ReservationStore};

/// Handle the book subcommand.
///
/// Every operation's outcome is printed in script order. Failed operations
/// are reported inline and do not change the exit status.
pub fn handle_book(
    graph: &FlightGraph,
    script: &Path,
    capacity: usize,
    format: OutputFormat,
) -> Result<()> {
    let ops = load_script(script)?;
    let mut store = ReservationStore::with_capacity(capacity);
    let outcomes = run_session(graph, &mut store, &ops);

    let failures = outcomes.iter().filter(|o| o.is_failure()).count();
    info!(
        operations = ops.len(),
        failures,
        live = store.len(),
        "booking session finished"
    );

    let plain: String = outcomes.iter().map(|o| o.render_plain()).collect();
    format.emit(&outcomes, &plain)?;
    Ok(())
}
