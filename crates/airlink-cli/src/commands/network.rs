//! Handlers for read-only network queries.

use anyhow::Result;

use airlink_cli::output::OutputFormat;
use airlink_lib::{CityListing, FlightBoard, FlightGraph, ReachableSummary};

/// Handle the cities subcommand.
pub fn handle_cities(graph: &FlightGraph, served: bool, format: OutputFormat) -> Result<()> {
    let listing = if served {
        CityListing::served(graph)
    } else {
        CityListing::registry(graph)
    };
    format.emit(&listing, &listing.render_plain())?;
    Ok(())
}

/// Handle the departures subcommand.
pub fn handle_departures(graph: &FlightGraph, city: &str, format: OutputFormat) -> Result<()> {
    let board = FlightBoard::departures(graph, city);
    format.emit(&board, &board.render_plain())?;
    Ok(())
}

/// Handle the arrivals subcommand.
pub fn handle_arrivals(graph: &FlightGraph, city: &str, format: OutputFormat) -> Result<()> {
    let board = FlightBoard::arrivals(graph, city);
    format.emit(&board, &board.render_plain())?;
    Ok(())
}

/// Handle the reachable subcommand.
pub fn handle_reachable(graph: &FlightGraph, city: &str, format: OutputFormat) -> Result<()> {
    let summary = ReachableSummary::from_graph(graph, city);
    format.emit(&summary, &summary.render_plain())?;
    Ok(())
}
