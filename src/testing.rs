//! Shared test fixtures.

pub mod fixtures;
