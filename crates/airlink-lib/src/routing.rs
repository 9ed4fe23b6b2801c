use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::network::{City, Flight, FlightTime};
use crate::path::{find_itinerary, shortest_path};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search by hop count, ignoring flight times.
    Bfs,
    /// Connecting flights that reach the destination earliest.
    EarliestArrival,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::EarliestArrival => "earliest_arrival",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for hop-count routes.
    pub fn bfs(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            algorithm: RouteAlgorithm::Bfs,
        }
    }

    /// Convenience constructor for time-feasible routes.
    pub fn earliest_arrival(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            algorithm: RouteAlgorithm::EarliestArrival,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub steps: Vec<City>,
    /// Flights taken; only populated for [`RouteAlgorithm::EarliestArrival`].
    pub legs: Vec<Flight>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Arrival time at the destination, when the plan carries flights.
    pub fn arrival(&self) -> Option<FlightTime> {
        self.legs.last().map(|leg| leg.arrival)
    }
}

/// Compute a route using the requested algorithm.
///
/// Unlike [`shortest_path`] this treats a missing route as an error so that
/// front ends can report it uniformly.
pub fn plan_route(graph: &FlightGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let origin = request.origin.as_str();
    let destination = request.destination.as_str();

    let plan = match request.algorithm {
        RouteAlgorithm::Bfs => {
            shortest_path(graph, origin, destination).map(|steps| RoutePlan {
                algorithm: request.algorithm,
                steps,
                legs: Vec::new(),
            })
        }
        RouteAlgorithm::EarliestArrival => {
            find_itinerary(graph, origin, destination).map(|itinerary| RoutePlan {
                algorithm: request.algorithm,
                steps: itinerary.cities(),
                legs: itinerary.legs,
            })
        }
    };

    plan.ok_or_else(|| Error::RouteNotFound {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
    })
}
