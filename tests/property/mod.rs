//! Property-based tests for configuration layering

mod layering;
