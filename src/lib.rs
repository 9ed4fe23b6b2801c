//! Workspace tooling package.
//!
//! This crate exists so workspace-level dev tooling (pre-commit hooks via
//! `rusty-hook`) has a package to hang off. The library and CLI live under
//! `crates/`.
