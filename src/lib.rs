//! Benchttp: layered run configuration for HTTP benchmarks
//!
//! Resolves the effective configuration of a benchmark run from built-in
//! defaults, a chain of config files linked by `extends`, and command-line
//! flags, then hands it to a benchmark engine.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
