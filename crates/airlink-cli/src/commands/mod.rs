// Module exports for CLI subcommands
//
// Each module handles a group of related subcommands. main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod book;
pub mod network;
pub mod route;
