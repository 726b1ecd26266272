//! Generator defaults and reproducibility constants

// Default values for configurable generator parameters
/// Fixed seed for reproducible map synthesis
pub const DEFAULT_SEED: u64 = 42;

/// Default number of positions in a generated map
pub const DEFAULT_MAP_LENGTH: usize = 1_000;

/// Default probability that a generated position is ocean
pub const DEFAULT_OCEAN_RATIO: f64 = 0.2;

/// Default probability that a generated position is an infected land cell
pub const DEFAULT_INFECTION_RATIO: f64 = 0.1;
