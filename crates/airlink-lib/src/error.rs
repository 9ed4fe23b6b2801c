use std::path::PathBuf;

use thiserror::Error;

use crate::network::FlightNo;

/// Convenient result alias for the Airlink library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No reservation exists for the given passenger name.
    #[error("passenger {passenger} not found or has no reservations")]
    NotFound { passenger: String },

    /// The reservation store already holds its maximum number of reservations.
    #[error("no available reservation slots (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Raised by the routing facade when no route connects the two cities.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when registering a city would exceed the registry bound.
    #[error("city registry is full ({capacity} cities); cannot register {city}")]
    CityRegistryFull { capacity: usize, city: String },

    /// Flight numbers must be positive.
    #[error("invalid flight number {number}; flight numbers must be positive")]
    InvalidFlightNumber { number: FlightNo },

    /// Flight numbers must be unique within a network.
    #[error("duplicate flight number {number} in network")]
    DuplicateFlightNumber { number: FlightNo },

    /// Network file could not be found.
    #[error("network file not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
