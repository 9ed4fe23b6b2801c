use std::env;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::FlightGraph;

/// Maximum number of cities the registry can hold.
pub const MAX_CITIES: usize = 30;

/// Environment variable consulted for a network file when no explicit path is given.
pub const NETWORK_ENV: &str = "AIRLINK_NETWORK";

/// City names are plain, case-sensitive strings compared by content.
pub type City = String;

/// Flight numbers are positive integers, unique within a network.
pub type FlightNo = u32;

/// Integer time-of-day (e.g. `830` for 08:30). No upper bound is enforced.
pub type FlightTime = i32;

/// A scheduled, directed flight between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub number: FlightNo,
    pub origin: City,
    pub destination: City,
    pub departure: FlightTime,
    pub arrival: FlightTime,
}

impl Flight {
    pub fn new(
        number: FlightNo,
        origin: impl Into<City>,
        destination: impl Into<City>,
        departure: FlightTime,
        arrival: FlightTime,
    ) -> Self {
        Self {
            number,
            origin: origin.into(),
            destination: destination.into(),
            departure,
            arrival,
        }
    }

    /// True when this flight flies exactly `origin -> destination`.
    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

/// Ordered registry of distinct city names, bounded at [`MAX_CITIES`].
///
/// The registry is maintained separately from the flight list: a registered
/// city may have no flights, and a flight may reference a city that was never
/// registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CityRegistry {
    names: Vec<City>,
}

impl CityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from names in order. Repeated names keep their first
    /// position.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<City>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(name)?;
        }
        Ok(registry)
    }

    /// Register a city. Returns `false` when the name was already present.
    pub fn register(&mut self, name: impl Into<City>) -> Result<bool> {
        let name = name.into();
        if self.contains(&name) {
            return Ok(false);
        }
        if self.names.len() >= MAX_CITIES {
            return Err(Error::CityRegistryFull {
                capacity: MAX_CITIES,
                city: name,
            });
        }
        self.names.push(name);
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> &[City] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Network description as stored in a JSON network file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    #[serde(default)]
    pub cities: Vec<City>,
    pub flights: Vec<Flight>,
}

impl NetworkSpec {
    /// Parse a network description from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Validate the description and build the flight graph.
    pub fn build(self) -> Result<FlightGraph> {
        let registry = CityRegistry::from_names(self.cities)?;
        FlightGraph::new(registry, self.flights)
    }
}

/// Load a network file from disk and build its flight graph.
pub fn load_network(path: &Path) -> Result<FlightGraph> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading flight network");
    let file = fs::File::open(path)?;
    let graph = NetworkSpec::from_reader(file)?.build()?;
    info!(
        flights = graph.len(),
        cities = graph.cities().len(),
        "loaded flight network from {}",
        path.display()
    );
    Ok(graph)
}

/// Resolve the network to use.
///
/// The resolution order is:
/// 1. Explicit `path` argument when provided.
/// 2. `AIRLINK_NETWORK` environment variable.
/// 3. The built-in [`sample_network`].
pub fn resolve_network(path: Option<&Path>) -> Result<FlightGraph> {
    if let Some(explicit) = path {
        return load_network(explicit);
    }

    if let Some(env_path) = env::var_os(NETWORK_ENV) {
        return load_network(Path::new(&env_path));
    }

    debug!("no network file configured; using built-in sample network");
    Ok(sample_network())
}

/// The airline's built-in three-city network.
pub fn sample_network() -> FlightGraph {
    let cities = CityRegistry {
        names: vec![
            "Karachi".to_string(),
            "Lahore".to_string(),
            "Islamabad".to_string(),
        ],
    };
    let flights = vec![
        Flight::new(1, "Karachi", "Islamabad", 830, 950),
        Flight::new(2, "Karachi", "Lahore", 930, 1130),
        Flight::new(3, "Lahore", "Islamabad", 1200, 1400),
        Flight::new(4, "Islamabad", "Karachi", 1400, 1600),
        Flight::new(5, "Lahore", "Karachi", 1100, 1230),
        Flight::new(6, "Islamabad", "Lahore", 1500, 1630),
    ];
    FlightGraph::assemble(cities, flights)
}
