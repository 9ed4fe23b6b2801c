//! Airlink library entry points.
//!
//! This crate loads an airline's flight network into memory, answers graph
//! queries over it (departures, arrivals, reachability, shortest path,
//! connecting itineraries) and keeps a bounded book of passenger reservations
//! against it. Front ends such as the CLI should only depend on the functions
//! exported here instead of reimplementing behavior.

pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod reservation;
pub mod routing;

pub use error::{Error, Result};
pub use graph::FlightGraph;
pub use network::{
    load_network, resolve_network, sample_network, City, CityRegistry, Flight, FlightNo,
    FlightTime, NetworkSpec, MAX_CITIES, NETWORK_ENV,
};
pub use output::{
    render_confirmation, render_no_route, render_reservation, BoardKind, CityListing, CitySource,
    FlightBoard, ManifestEntry, ManifestSummary, ReachableSummary, RouteSummary,
};
pub use path::{find_itinerary, shortest_path, Itinerary};
pub use reservation::{
    passenger_name, BookedFlight, Reservation, ReservationNo, ReservationStore, MAX_RESERVATIONS,
};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
