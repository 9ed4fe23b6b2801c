use std::fmt::Write;

use serde::Serialize;

use crate::graph::FlightGraph;
use crate::network::{City, Flight, FlightNo, FlightTime};
use crate::reservation::{Reservation, ReservationNo, ReservationStore};
use crate::routing::{RouteAlgorithm, RoutePlan, RouteRequest};

/// Where a city listing was drawn from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CitySource {
    /// The city registry, in registration order.
    Registry,
    /// Flight endpoints, sorted.
    Served,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CityListing {
    pub source: CitySource,
    pub cities: Vec<City>,
}

impl CityListing {
    pub fn registry(graph: &FlightGraph) -> Self {
        Self {
            source: CitySource::Registry,
            cities: graph.list_cities(),
        }
    }

    pub fn served(graph: &FlightGraph) -> Self {
        Self {
            source: CitySource::Served,
            cities: graph.served_cities(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let header = match self.source {
            CitySource::Registry => "List of all cities serviced by the airline:",
            CitySource::Served => "List of all cities served by scheduled flights:",
        };
        let _ = writeln!(buffer, "{header}");
        for city in &self.cities {
            let _ = writeln!(buffer, "{city}");
        }
        buffer
    }
}

/// Direction of a [`FlightBoard`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    Departures,
    Arrivals,
}

/// Departures or arrivals for one city, already in board order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightBoard {
    pub kind: BoardKind,
    pub city: City,
    pub flights: Vec<Flight>,
}

impl FlightBoard {
    pub fn departures(graph: &FlightGraph, city: &str) -> Self {
        Self {
            kind: BoardKind::Departures,
            city: city.to_string(),
            flights: graph.departures_from(city).into_iter().cloned().collect(),
        }
    }

    pub fn arrivals(graph: &FlightGraph, city: &str) -> Self {
        Self {
            kind: BoardKind::Arrivals,
            city: city.to_string(),
            flights: graph.arrivals_to(city).into_iter().cloned().collect(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self.kind {
            BoardKind::Departures => {
                push_heading(
                    &mut buffer,
                    &format!("List of flight departures for {}:", self.city),
                );
                for flight in &self.flights {
                    let _ = writeln!(
                        buffer,
                        "Flight No: {}, Departure Time: {}, Arrival City: {}",
                        flight.number, flight.departure, flight.destination
                    );
                }
            }
            BoardKind::Arrivals => {
                push_heading(
                    &mut buffer,
                    &format!("List of flight arrivals for {}:", self.city),
                );
                for flight in &self.flights {
                    let _ = writeln!(
                        buffer,
                        "Flight No: {}, Arrival Time: {}, Departure City: {}",
                        flight.number, flight.arrival, flight.origin
                    );
                }
            }
        }
        buffer
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReachableSummary {
    pub origin: City,
    pub cities: Vec<City>,
}

impl ReachableSummary {
    pub fn from_graph(graph: &FlightGraph, origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            cities: graph.reachable_from(origin),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        push_heading(
            &mut buffer,
            &format!("Cities reachable from {}:", self.origin),
        );
        for city in &self.cities {
            let _ = writeln!(buffer, "{city}");
        }
        buffer
    }
}

/// Structured representation of a planned route that front ends can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub origin: City,
    pub destination: City,
    pub hops: usize,
    pub steps: Vec<City>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<Flight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<FlightTime>,
}

impl RouteSummary {
    pub fn from_plan(request: &RouteRequest, plan: &RoutePlan) -> Self {
        Self {
            algorithm: plan.algorithm,
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            hops: plan.hop_count(),
            steps: plan.steps.clone(),
            legs: plan.legs.clone(),
            arrival: plan.arrival(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self.algorithm {
            RouteAlgorithm::Bfs => {
                let _ = writeln!(
                    buffer,
                    "Shortest path from {} to {} ({} {}):",
                    self.origin,
                    self.destination,
                    self.hops,
                    plural(self.hops, "hop", "hops")
                );
                let _ = writeln!(buffer, "{}", self.steps.join(" -> "));
            }
            RouteAlgorithm::EarliestArrival => {
                let _ = write!(
                    buffer,
                    "Itinerary from {} to {} ({} {}",
                    self.origin,
                    self.destination,
                    self.legs.len(),
                    plural(self.legs.len(), "flight", "flights")
                );
                match self.arrival {
                    Some(arrival) => {
                        let _ = writeln!(buffer, ", arriving {arrival}):");
                    }
                    None => {
                        let _ = writeln!(buffer, "):");
                    }
                }
                for leg in &self.legs {
                    let _ = writeln!(
                        buffer,
                        " - Flight No: {}, {} {} -> {} {}",
                        leg.number, leg.origin, leg.departure, leg.destination, leg.arrival
                    );
                }
            }
        }
        buffer
    }
}

/// Message shown when no route connects two cities.
pub fn render_no_route(origin: &str, destination: &str) -> String {
    format!("No path found between {origin} and {destination}.\n")
}

/// Confirmation line for a successful booking.
pub fn render_confirmation(number: ReservationNo) -> String {
    format!("Reservation successful. Reservation No: {number}\n")
}

/// Full schedule line for one reservation.
pub fn render_reservation(reservation: &Reservation) -> String {
    let mut buffer = String::new();
    let _ = write!(
        buffer,
        "Reservation No: {}, Passenger Name: {}, Departure City: {}, Arrival City: {}",
        reservation.number, reservation.passenger, reservation.origin, reservation.destination
    );
    match reservation.flight {
        Some(flight) => {
            let _ = writeln!(
                buffer,
                ", Flight No: {}, Departure Time: {}, Arrival Time: {}",
                flight.number, flight.departure, flight.arrival
            );
        }
        None => {
            let _ = writeln!(buffer, ", Flight No: unassigned");
        }
    }
    buffer
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub reservation: ReservationNo,
    pub passenger: String,
    pub origin: City,
    pub destination: City,
}

/// Passengers booked on one flight, ordered by name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestSummary {
    pub flight: FlightNo,
    pub passengers: Vec<ManifestEntry>,
}

impl ManifestSummary {
    pub fn from_store(store: &ReservationStore, flight: FlightNo, graph: &FlightGraph) -> Self {
        let passengers = store
            .manifest_for(flight, graph)
            .into_iter()
            .map(|reservation| ManifestEntry {
                reservation: reservation.number,
                passenger: reservation.passenger.clone(),
                origin: reservation.origin.clone(),
                destination: reservation.destination.clone(),
            })
            .collect();
        Self { flight, passengers }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        push_heading(
            &mut buffer,
            &format!(
                "List of passengers for Flight No {} (in order of name):",
                self.flight
            ),
        );
        for entry in &self.passengers {
            let _ = writeln!(
                buffer,
                "Reservation No: {}, Passenger Name: {}, Departure City: {}, Arrival City: {}",
                entry.reservation, entry.passenger, entry.origin, entry.destination
            );
        }
        buffer
    }
}

fn push_heading(buffer: &mut String, heading: &str) {
    let _ = writeln!(buffer, "{heading}");
    let _ = writeln!(buffer, "{}", "-".repeat(heading.chars().count()));
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::sample_network;
    use crate::routing::plan_route;

    #[test]
    fn departure_board_matches_report_format() {
        let graph = sample_network();
        let board = FlightBoard::departures(&graph, "Karachi");
        let text = board.render_plain();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "List of flight departures for Karachi:");
        assert_eq!(lines[1], "-".repeat(lines[0].len()));
        assert_eq!(
            lines[2],
            "Flight No: 1, Departure Time: 830, Arrival City: Islamabad"
        );
        assert_eq!(
            lines[3],
            "Flight No: 2, Departure Time: 930, Arrival City: Lahore"
        );
    }

    #[test]
    fn arrival_board_lists_origin_city() {
        let graph = sample_network();
        let text = FlightBoard::arrivals(&graph, "Karachi").render_plain();
        assert!(text.contains("Flight No: 5, Arrival Time: 1230, Departure City: Lahore"));
        assert!(text.contains("Flight No: 4, Arrival Time: 1600, Departure City: Islamabad"));
    }

    #[test]
    fn unbound_reservation_renders_unassigned_flight() {
        let reservation = Reservation {
            number: 7,
            passenger: "Ann Lee".to_string(),
            origin: "X".to_string(),
            destination: "Y".to_string(),
            flight: None,
        };
        assert_eq!(
            render_reservation(&reservation),
            "Reservation No: 7, Passenger Name: Ann Lee, Departure City: X, Arrival City: Y, Flight No: unassigned\n"
        );
    }

    #[test]
    fn path_summary_joins_steps() {
        let graph = sample_network();
        let request = RouteRequest::bfs("Lahore", "Islamabad");
        let plan = plan_route(&graph, &request).unwrap();
        let text = RouteSummary::from_plan(&request, &plan).render_plain();
        assert!(text.starts_with("Shortest path from Lahore to Islamabad (1 hop):"));
        assert!(text.contains("Lahore -> Islamabad"));
    }

    #[test]
    fn bfs_summary_omits_empty_legs_in_json() {
        let graph = sample_network();
        let request = RouteRequest::bfs("Karachi", "Lahore");
        let plan = plan_route(&graph, &request).unwrap();
        let json = serde_json::to_value(RouteSummary::from_plan(&request, &plan)).unwrap();
        assert_eq!(json["algorithm"], "bfs");
        assert_eq!(json["hops"], 1);
        assert!(json.get("legs").is_none());
        assert!(json.get("arrival").is_none());
    }
}
