//! Passenger reservation book.
//!
//! The store is an owned, ordered collection bounded by an explicit capacity.
//! Reservations are numbered sequentially and numbers are never reused, even
//! after a cancellation. Passenger lookups are exact, case-sensitive matches on
//! the full name.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::network::{City, Flight, FlightNo, FlightTime};

/// Default maximum number of live reservations.
pub const MAX_RESERVATIONS: usize = 100;

/// Sequential reservation number, starting at 1.
pub type ReservationNo = u32;

/// Flight details copied onto a reservation when it is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookedFlight {
    pub number: FlightNo,
    pub departure: FlightTime,
    pub arrival: FlightTime,
}

impl From<&Flight> for BookedFlight {
    fn from(flight: &Flight) -> Self {
        Self {
            number: flight.number,
            departure: flight.departure,
            arrival: flight.arrival,
        }
    }
}

/// A single passenger reservation.
///
/// `flight` is `None` when no direct flight connected the requested cities at
/// booking time; the reservation is still kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub number: ReservationNo,
    pub passenger: String,
    pub origin: City,
    pub destination: City,
    pub flight: Option<BookedFlight>,
}

impl Reservation {
    pub fn flight_number(&self) -> Option<FlightNo> {
        self.flight.map(|flight| flight.number)
    }
}

/// Join first and last name into the full passenger name used for lookups.
pub fn passenger_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[derive(Debug, Clone)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    capacity: usize,
    last_issued: ReservationNo,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::with_capacity(MAX_RESERVATIONS)
    }
}

impl ReservationStore {
    /// Empty store holding at most [`MAX_RESERVATIONS`] reservations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with a custom capacity bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reservations: Vec::new(),
            capacity,
            last_issued: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Highest reservation number handed out so far (0 before the first booking).
    pub fn last_issued(&self) -> ReservationNo {
        self.last_issued
    }

    /// Most recent live reservation, i.e. the one the last successful
    /// [`make_reservation`](Self::make_reservation) pushed unless it was
    /// cancelled since.
    pub fn latest(&self) -> Option<&Reservation> {
        self.reservations.last()
    }

    /// Live reservations in booking order.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.iter()
    }

    /// Book a passenger from `origin` to `destination`.
    ///
    /// The first flight in load order connecting the two cities is bound to the
    /// reservation. When none exists the reservation is still created with no
    /// flight. Fails with [`Error::CapacityExceeded`] without touching the store
    /// when it is full.
    pub fn make_reservation(
        &mut self,
        first_name: &str,
        last_name: &str,
        origin: &str,
        destination: &str,
        graph: &FlightGraph,
    ) -> Result<ReservationNo> {
        if self.reservations.len() >= self.capacity {
            warn!(capacity = self.capacity, "reservation rejected; store is full");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let number = self.last_issued + 1;
        let flight = graph
            .first_flight_between(origin, destination)
            .map(BookedFlight::from);
        if flight.is_none() {
            warn!(
                reservation = number,
                origin, destination, "no direct flight; reservation has no flight bound"
            );
        }

        self.last_issued = number;
        self.reservations.push(Reservation {
            number,
            passenger: passenger_name(first_name, last_name),
            origin: origin.to_string(),
            destination: destination.to_string(),
            flight,
        });
        debug!(reservation = number, live = self.reservations.len(), "reservation made");

        Ok(number)
    }

    /// First reservation held by `passenger`.
    pub fn schedule_for(&self, passenger: &str) -> Result<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.passenger == passenger)
            .ok_or_else(|| Error::NotFound {
                passenger: passenger.to_string(),
            })
    }

    /// Remove the first reservation held by `passenger` and return it.
    ///
    /// Remaining reservations keep their relative order. The number counter is
    /// not rewound.
    pub fn cancel(&mut self, passenger: &str) -> Result<Reservation> {
        let Some(position) = self
            .reservations
            .iter()
            .position(|reservation| reservation.passenger == passenger)
        else {
            return Err(Error::NotFound {
                passenger: passenger.to_string(),
            });
        };

        let removed = self.reservations.remove(position);
        info!(
            reservation = removed.number,
            passenger, "reservation cancelled"
        );
        Ok(removed)
    }

    /// Reservations on flight `flight_no`, ordered by passenger name.
    ///
    /// A reservation is listed only when its cities still match a flight with
    /// that number in `graph`, which filters out records bound against a
    /// different network.
    pub fn manifest_for(&self, flight_no: FlightNo, graph: &FlightGraph) -> Vec<&Reservation> {
        let mut manifest: Vec<&Reservation> = self
            .reservations
            .iter()
            .filter(|reservation| reservation.flight_number() == Some(flight_no))
            .filter(|reservation| {
                graph
                    .flights_numbered(flight_no)
                    .any(|flight| flight.connects(&reservation.origin, &reservation.destination))
            })
            .collect();
        manifest.sort_by(|a, b| a.passenger.cmp(&b.passenger));
        manifest
    }
}
