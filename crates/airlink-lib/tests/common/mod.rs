//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests,
//! including fixture paths and small hand-built networks.

use std::path::PathBuf;

use airlink_lib::{CityRegistry, Flight, FlightGraph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the JSON network fixture.
#[allow(dead_code)]
pub fn fixture_network_path() -> PathBuf {
    fixtures_dir().join("network.json")
}

/// The three-flight A/B/C network used by the reference scenario.
#[allow(dead_code)]
pub fn scenario_graph() -> FlightGraph {
    FlightGraph::new(
        CityRegistry::from_names(["A", "B", "C"]).expect("registry fits"),
        vec![
            Flight::new(1, "A", "B", 830, 950),
            Flight::new(2, "A", "C", 930, 1130),
            Flight::new(3, "B", "C", 1200, 1400),
        ],
    )
    .expect("scenario network is valid")
}
