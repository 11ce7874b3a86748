//! Shared CLI infrastructure for the GND authority loader binary.

pub mod logging;
