use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::{Error, Result};
use crate::network::{City, CityRegistry, Flight, FlightNo};

/// Directed multigraph of cities connected by scheduled flights.
///
/// Flights keep their load order. Outgoing and incoming edges are indexed per
/// city at construction time and the graph is never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    flights: Vec<Flight>,
    cities: CityRegistry,
    departures: HashMap<City, Vec<usize>>,
    arrivals: HashMap<City, Vec<usize>>,
}

impl FlightGraph {
    /// Validate flight numbers and build the graph.
    ///
    /// Flight numbers must be positive and unique. Flights whose origin equals
    /// their destination are accepted as-is.
    pub fn new(cities: CityRegistry, flights: Vec<Flight>) -> Result<Self> {
        let mut seen: HashSet<FlightNo> = HashSet::with_capacity(flights.len());
        for flight in &flights {
            if flight.number == 0 {
                return Err(Error::InvalidFlightNumber {
                    number: flight.number,
                });
            }
            if !seen.insert(flight.number) {
                return Err(Error::DuplicateFlightNumber {
                    number: flight.number,
                });
            }
        }
        Ok(Self::assemble(cities, flights))
    }

    pub(crate) fn assemble(cities: CityRegistry, flights: Vec<Flight>) -> Self {
        let mut departures: HashMap<City, Vec<usize>> = HashMap::new();
        let mut arrivals: HashMap<City, Vec<usize>> = HashMap::new();
        for (index, flight) in flights.iter().enumerate() {
            departures
                .entry(flight.origin.clone())
                .or_default()
                .push(index);
            arrivals
                .entry(flight.destination.clone())
                .or_default()
                .push(index);
        }

        Self {
            flights,
            cities,
            departures,
            arrivals,
        }
    }

    /// All flights in load order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    /// Cities from the registry, in registry order.
    pub fn list_cities(&self) -> Vec<City> {
        self.cities.names().to_vec()
    }

    /// Every city that appears as a flight endpoint, sorted and deduplicated.
    pub fn served_cities(&self) -> Vec<City> {
        self.flights
            .iter()
            .flat_map(|flight| [flight.origin.as_str(), flight.destination.as_str()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Outgoing flights of `city` in load order.
    pub fn outgoing<'a>(&'a self, city: &str) -> impl Iterator<Item = &'a Flight> + 'a {
        self.indexed(&self.departures, city)
    }

    /// Incoming flights of `city` in load order.
    pub fn incoming<'a>(&'a self, city: &str) -> impl Iterator<Item = &'a Flight> + 'a {
        self.indexed(&self.arrivals, city)
    }

    fn indexed<'a>(
        &'a self,
        index: &'a HashMap<City, Vec<usize>>,
        city: &str,
    ) -> impl Iterator<Item = &'a Flight> + 'a {
        index
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&position| &self.flights[position])
    }

    /// Flights leaving `city`, earliest departure first. Equal departure
    /// times keep load order.
    pub fn departures_from(&self, city: &str) -> Vec<&Flight> {
        let mut flights: Vec<&Flight> = self.outgoing(city).collect();
        flights.sort_by_key(|flight| flight.departure);
        flights
    }

    /// Flights landing in `city`, earliest arrival first. Equal arrival times
    /// keep load order.
    pub fn arrivals_to(&self, city: &str) -> Vec<&Flight> {
        let mut flights: Vec<&Flight> = self.incoming(city).collect();
        flights.sort_by_key(|flight| flight.arrival);
        flights
    }

    /// Distinct cities one direct flight away from `city`, sorted.
    pub fn reachable_from(&self, city: &str) -> Vec<City> {
        self.outgoing(city)
            .map(|flight| flight.destination.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// First flight in load order flying exactly `origin -> destination`.
    pub fn first_flight_between(&self, origin: &str, destination: &str) -> Option<&Flight> {
        self.outgoing(origin)
            .find(|flight| flight.destination == destination)
    }

    /// Flights carrying `number`.
    pub fn flights_numbered(&self, number: FlightNo) -> impl Iterator<Item = &Flight> + '_ {
        self.flights
            .iter()
            .filter(move |flight| flight.number == number)
    }
}
