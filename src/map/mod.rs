//! Spatial structure of the world map
//!
//! This module contains map-related functionality including:
//! - The three-symbol map alphabet
//! - Continent segmentation and iteration

/// Continent views and the segmentation iterator
pub mod continents;
/// World map symbols and classification predicates
pub mod symbols;

pub use continents::{Continent, Continents, continents};
