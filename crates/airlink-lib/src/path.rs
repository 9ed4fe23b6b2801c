use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::graph::FlightGraph;
use crate::network::{City, Flight, FlightTime};

/// Find the path with the fewest hops between `origin` and `destination`
/// using breadth-first search.
///
/// Each city's outgoing flights are relaxed in load order and the first visit
/// to a city wins, so among equally short paths the one discovered first is
/// returned. Flight times are ignored. Returns `None` when `destination` cannot
/// be reached.
pub fn shortest_path<'a>(
    graph: &'a FlightGraph,
    origin: &'a str,
    destination: &str,
) -> Option<Vec<City>> {
    if origin == destination {
        return Some(vec![origin.to_string()]);
    }

    let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(origin, None);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        for flight in graph.outgoing(current) {
            let next = flight.destination.as_str();
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == destination {
                return Some(reconstruct_path(&parents, origin, destination));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<&str, Option<&str>>,
    origin: &str,
    destination: &str,
) -> Vec<City> {
    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(city) = current {
        path.push(city.to_string());
        if city == origin {
            break;
        }
        current = parents.get(city).copied().flatten();
    }
    path.reverse();
    path
}

/// Time-feasible sequence of connecting flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub origin: City,
    pub legs: Vec<Flight>,
}

impl Itinerary {
    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// Departure time of the first leg.
    pub fn departure(&self) -> Option<FlightTime> {
        self.legs.first().map(|leg| leg.departure)
    }

    /// Arrival time of the final leg.
    pub fn arrival(&self) -> Option<FlightTime> {
        self.legs.last().map(|leg| leg.arrival)
    }

    /// Cities visited, starting with the origin.
    pub fn cities(&self) -> Vec<City> {
        std::iter::once(self.origin.clone())
            .chain(self.legs.iter().map(|leg| leg.destination.clone()))
            .collect()
    }
}

/// Find the itinerary that reaches `destination` earliest.
///
/// Every leg after the first must depart from the previous leg's destination
/// no earlier than that leg arrived. Times are compared as plain integers with
/// no day rollover. The search settles cities in order of earliest arrival, so
/// the result is optimal whenever every flight arrives no earlier than it
/// departs. Each city is settled once, so the legs always chain back to
/// `origin`. Equal arrival times go to the candidate discovered first.
pub fn find_itinerary<'a>(
    graph: &'a FlightGraph,
    origin: &'a str,
    destination: &str,
) -> Option<Itinerary> {
    if origin == destination {
        return Some(Itinerary {
            origin: origin.to_string(),
            legs: Vec::new(),
        });
    }

    let mut earliest: HashMap<&'a str, FlightTime> = HashMap::new();
    let mut via: HashMap<&'a str, &'a Flight> = HashMap::new();
    let mut settled: HashSet<&'a str> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut discovered = 0usize;

    // The first leg may depart at any time.
    earliest.insert(origin, FlightTime::MIN);
    queue.push(ArrivalEntry::new(origin, FlightTime::MIN, discovered));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.city) {
            continue;
        }

        if entry.city == destination {
            return Some(reconstruct_itinerary(graph, &via, origin, destination));
        }

        for flight in graph.outgoing(entry.city) {
            if flight.departure < entry.time {
                continue;
            }

            let next = flight.destination.as_str();
            // Settled cities keep their leg; overnight flights may report an
            // earlier arrival after the fact.
            if settled.contains(next) {
                continue;
            }
            if earliest
                .get(next)
                .is_some_and(|&best| best <= flight.arrival)
            {
                continue;
            }

            earliest.insert(next, flight.arrival);
            via.insert(next, flight);
            discovered += 1;
            queue.push(ArrivalEntry::new(next, flight.arrival, discovered));
        }
    }

    None
}

fn reconstruct_itinerary(
    graph: &FlightGraph,
    via: &HashMap<&str, &Flight>,
    origin: &str,
    destination: &str,
) -> Itinerary {
    let mut legs = Vec::new();
    let mut current = destination;
    // Bounded by the flight count so malformed schedules cannot cycle.
    for _ in 0..graph.len() {
        if current == origin {
            break;
        }
        let Some(flight) = via.get(current) else {
            break;
        };
        legs.push((*flight).clone());
        current = flight.origin.as_str();
    }
    legs.reverse();

    Itinerary {
        origin: origin.to_string(),
        legs,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct ArrivalEntry<'a> {
    city: &'a str,
    time: FlightTime,
    discovered: usize,
}

impl<'a> ArrivalEntry<'a> {
    fn new(city: &'a str, time: FlightTime, discovered: usize) -> Self {
        Self {
            city,
            time,
            discovered,
        }
    }
}

impl Ord for ArrivalEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by arrival time.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.discovered.cmp(&self.discovered))
    }
}

impl PartialOrd for ArrivalEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
