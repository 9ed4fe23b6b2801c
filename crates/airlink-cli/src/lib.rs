//! Airlink CLI library.
//!
//! This crate provides the pieces of the `airlink` command-line tool that are
//! worth testing without spawning the binary: output formatting and the
//! booking-session runner.

pub mod output;
pub mod session;
