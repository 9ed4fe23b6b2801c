use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("airlink");
    cmd.env_remove("AIRLINK_NETWORK")
        .env("RUST_LOG", "error")
        .arg("--network")
        .arg(fixtures_dir().join("network.json"));
    cmd
}

#[test]
fn session_script_runs_every_operation() {
    cli()
        .arg("book")
        .arg("--script")
        .arg(fixtures_dir().join("session.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reservation successful. Reservation No: 1",
        ))
        .stdout(predicate::str::contains("no flight assigned"))
        .stdout(predicate::str::contains(
            "Reservation No: 3, Passenger Name: Bilal Raza, Departure City: Lahore, Arrival City: Quetta, Flight No: unassigned",
        ))
        .stdout(predicate::str::contains(
            "Reservation No: 2, Passenger Name: Amina Shah, Departure City: Karachi, Arrival City: Lahore\nReservation No: 1, Passenger Name: John Doe",
        ))
        .stdout(predicate::str::contains(
            "Reservation deleted for passenger John Doe",
        ))
        .stdout(predicate::str::contains(
            "Error (schedule): passenger John Doe not found or has no reservations",
        ))
        // Numbers keep climbing after the cancellation.
        .stdout(predicate::str::contains(
            "Reservation successful. Reservation No: 4",
        ));
}

#[test]
fn capacity_flag_limits_the_book() {
    let temp = tempdir().expect("create temp dir");
    let script = temp.path().join("script.json");
    fs::write(
        &script,
        r#"[
            {"op":"reserve","first_name":"A","last_name":"One","from":"Karachi","to":"Lahore"},
            {"op":"reserve","first_name":"B","last_name":"Two","from":"Karachi","to":"Lahore"}
        ]"#,
    )
    .expect("write script");

    cli()
        .arg("book")
        .arg("--script")
        .arg(&script)
        .arg("--capacity")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error (reserve): no available reservation slots (capacity 1)",
        ));
}

#[test]
fn json_output_tags_each_outcome() {
    let output = cli()
        .arg("--format")
        .arg("json")
        .arg("book")
        .arg("--script")
        .arg(fixtures_dir().join("session.json"))
        .output()
        .expect("run command");
    assert!(output.status.success());

    let outcomes: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    let outcomes = outcomes.as_array().expect("array of outcomes");
    assert_eq!(outcomes.len(), 8);
    assert_eq!(outcomes[0]["result"], "reserved");
    assert_eq!(outcomes[0]["flight"], 2);
    assert_eq!(outcomes[4]["result"], "manifest");
    assert_eq!(outcomes[4]["passengers"][0]["passenger"], "Amina Shah");
    assert_eq!(outcomes[6]["result"], "failed");
}

#[test]
fn malformed_script_fails() {
    let temp = tempdir().expect("create temp dir");
    let script = temp.path().join("bad.json");
    fs::write(&script, r#"[{"op":"upgrade"}]"#).expect("write script");

    cli()
        .arg("book")
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse booking script"));
}
