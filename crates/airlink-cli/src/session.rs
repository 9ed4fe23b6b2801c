//! Booking sessions.
//!
//! Reservations only live for one process, so the `book` command replays a
//! JSON list of operations against a single [`ReservationStore`]. Store errors
//! are recorded per operation and never abort the session.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use airlink_lib::{
    render_confirmation, render_reservation, FlightGraph, FlightNo, ManifestSummary, Reservation,
    ReservationNo, ReservationStore,
};

/// One step of a booking script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BookingOp {
    Reserve {
        first_name: String,
        last_name: String,
        from: String,
        to: String,
    },
    Schedule {
        passenger: String,
    },
    Cancel {
        passenger: String,
    },
    Manifest {
        flight: FlightNo,
    },
}

impl BookingOp {
    fn label(&self) -> &'static str {
        match self {
            BookingOp::Reserve { .. } => "reserve",
            BookingOp::Schedule { .. } => "schedule",
            BookingOp::Cancel { .. } => "cancel",
            BookingOp::Manifest { .. } => "manifest",
        }
    }
}

/// Result of applying one [`BookingOp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BookingOutcome {
    Reserved {
        reservation: ReservationNo,
        #[serde(skip_serializing_if = "Option::is_none")]
        flight: Option<FlightNo>,
    },
    Schedule {
        reservation: Reservation,
    },
    Cancelled {
        reservation: Reservation,
    },
    Manifest(ManifestSummary),
    Failed {
        op: &'static str,
        error: String,
    },
}

impl BookingOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, BookingOutcome::Failed { .. })
    }

    pub fn render_plain(&self) -> String {
        match self {
            BookingOutcome::Reserved {
                reservation,
                flight,
            } => {
                let mut buffer = render_confirmation(*reservation);
                if flight.is_none() {
                    let _ = writeln!(buffer, "Warning: no direct flight; no flight assigned.");
                }
                buffer
            }
            BookingOutcome::Schedule { reservation } => render_reservation(reservation),
            BookingOutcome::Cancelled { reservation } => {
                format!(
                    "Reservation deleted for passenger {}\n",
                    reservation.passenger
                )
            }
            BookingOutcome::Manifest(summary) => summary.render_plain(),
            BookingOutcome::Failed { op, error } => format!("Error ({op}): {error}\n"),
        }
    }
}

/// Read a booking script from disk.
pub fn load_script(path: &Path) -> Result<Vec<BookingOp>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read booking script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse booking script {}", path.display()))
}

/// Apply every operation in order and collect the outcomes.
pub fn run_session(
    graph: &FlightGraph,
    store: &mut ReservationStore,
    ops: &[BookingOp],
) -> Vec<BookingOutcome> {
    ops.iter().map(|op| apply(graph, store, op)).collect()
}

fn apply(graph: &FlightGraph, store: &mut ReservationStore, op: &BookingOp) -> BookingOutcome {
    debug!(op = op.label(), "applying booking operation");
    let result = match op {
        BookingOp::Reserve {
            first_name,
            last_name,
            from,
            to,
        } => store
            .make_reservation(first_name, last_name, from, to, graph)
            .map(|reservation| {
                let flight = store.latest().and_then(Reservation::flight_number);
                BookingOutcome::Reserved {
                    reservation,
                    flight,
                }
            }),
        BookingOp::Schedule { passenger } => store
            .schedule_for(passenger)
            .map(|reservation| BookingOutcome::Schedule {
                reservation: reservation.clone(),
            }),
        BookingOp::Cancel { passenger } => store
            .cancel(passenger)
            .map(|reservation| BookingOutcome::Cancelled { reservation }),
        BookingOp::Manifest { flight } => Ok(BookingOutcome::Manifest(
            ManifestSummary::from_store(store, *flight, graph),
        )),
    };

    result.unwrap_or_else(|err| BookingOutcome::Failed {
        op: op.label(),
        error: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use airlink_lib::sample_network;

    fn reserve(first: &str, last: &str, from: &str, to: &str) -> BookingOp {
        BookingOp::Reserve {
            first_name: first.to_string(),
            last_name: last.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn parses_tagged_operations() {
        let json = r#"[
            {"op":"reserve","first_name":"John","last_name":"Doe","from":"Karachi","to":"Lahore"},
            {"op":"manifest","flight":2}
        ]"#;
        let ops: Vec<BookingOp> = serde_json::from_str(json).unwrap();
        assert_eq!(ops[0], reserve("John", "Doe", "Karachi", "Lahore"));
        assert_eq!(ops[1], BookingOp::Manifest { flight: 2 });
    }

    #[test]
    fn failures_do_not_abort_the_session() {
        let graph = sample_network();
        let mut store = ReservationStore::with_capacity(1);
        let ops = vec![
            reserve("John", "Doe", "Karachi", "Lahore"),
            reserve("Amina", "Shah", "Karachi", "Lahore"),
            BookingOp::Cancel {
                passenger: "Nobody Here".to_string(),
            },
            BookingOp::Schedule {
                passenger: "John Doe".to_string(),
            },
        ];

        let outcomes = run_session(&graph, &mut store, &ops);
        assert_eq!(
            outcomes[0],
            BookingOutcome::Reserved {
                reservation: 1,
                flight: Some(2)
            }
        );
        assert!(outcomes[1].is_failure());
        assert!(outcomes[1].render_plain().contains("no available reservation slots"));
        assert!(outcomes[2].is_failure());
        assert!(matches!(outcomes[3], BookingOutcome::Schedule { .. }));
    }

    #[test]
    fn unbound_reservation_is_flagged_in_text() {
        let graph = sample_network();
        let mut store = ReservationStore::new();
        let outcomes = run_session(
            &graph,
            &mut store,
            &[reserve("Bilal", "Raza", "Lahore", "Quetta")],
        );
        let text = outcomes[0].render_plain();
        assert!(text.starts_with("Reservation successful. Reservation No: 1"));
        assert!(text.contains("no flight assigned"));
    }

    #[test]
    fn outcomes_serialize_with_result_tag() {
        let outcome = BookingOutcome::Failed {
            op: "cancel",
            error: "passenger X not found or has no reservations".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"], "failed");
        assert_eq!(json["op"], "cancel");
    }
}
