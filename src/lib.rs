//! Continent infection analysis over quarantined string world maps
//!
//! The system segments a world map into continents separated by ocean, applies
//! full-continent contagion, and reports the infected share of the total land
//! population as a percentage.

#![forbid(unsafe_code)]

/// Infection percentage computation and whole-continent contagion spread
pub mod algorithm;
/// Aggregate population statistics shared by the percentage formulations
pub mod analysis;
/// Generator defaults and reproducibility constants
pub mod configuration;
/// Error types for fallible operations
pub mod error;
/// Seeded random world map synthesis
pub mod generator;
/// World map alphabet and continent segmentation
pub mod map;

pub use error::{QuarantineError, Result};
