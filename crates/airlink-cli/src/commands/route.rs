//! Route command handlers for computing paths between cities.

use anyhow::Result;
use serde_json::json;

use airlink_cli::output::OutputFormat;
use airlink_lib::{
    plan_route, render_no_route, Error as RouteError, FlightGraph, RouteRequest, RouteSummary,
};

/// Handle the path subcommand (fewest hops).
pub fn handle_path(graph: &FlightGraph, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    emit_route(graph, &RouteRequest::bfs(from, to), format)
}

/// Handle the route subcommand (earliest arrival).
pub fn handle_route(graph: &FlightGraph, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    emit_route(graph, &RouteRequest::earliest_arrival(from, to), format)
}

fn emit_route(graph: &FlightGraph, request: &RouteRequest, format: OutputFormat) -> Result<()> {
    match plan_route(graph, request) {
        Ok(plan) => {
            let summary = RouteSummary::from_plan(request, &plan);
            format.emit(&summary, &summary.render_plain())?;
        }
        // A missing route is a normal answer, not a failure.
        Err(RouteError::RouteNotFound {
            origin,
            destination,
        }) => {
            let value = json!({
                "algorithm": request.algorithm,
                "origin": origin,
                "destination": destination,
                "found": false,
            });
            format.emit(&value, &render_no_route(&origin, &destination))?;
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}
