//! Seeded random world map synthesis
//!
//! Produces reproducible maps for benchmarks and for cross-validating the
//! two percentage formulations against each other on inputs no fixture
//! table would cover.

use crate::configuration::{
    DEFAULT_INFECTION_RATIO, DEFAULT_MAP_LENGTH, DEFAULT_OCEAN_RATIO, DEFAULT_SEED,
};
use crate::error::{Result, invalid_parameter};
use crate::map::symbols;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters controlling random world map synthesis
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfiguration {
    /// Number of map positions to generate
    pub length: usize,
    /// Probability that a position is an ocean separator
    pub ocean_ratio: f64,
    /// Probability that a position is an infected land cell
    pub infection_ratio: f64,
    /// Seed for the deterministic random source
    pub seed: u64,
}

impl Default for GeneratorConfiguration {
    fn default() -> Self {
        Self {
            length: DEFAULT_MAP_LENGTH,
            ocean_ratio: DEFAULT_OCEAN_RATIO,
            infection_ratio: DEFAULT_INFECTION_RATIO,
            seed: DEFAULT_SEED,
        }
    }
}

/// Generate a world map by drawing each position independently
///
/// Positions become ocean with probability `ocean_ratio`, infected land with
/// probability `infection_ratio`, and uninfected land otherwise. Identical
/// configurations always produce identical maps.
///
/// # Errors
///
/// Returns [`QuarantineError::InvalidParameter`](crate::QuarantineError) if
/// either ratio lies outside `[0, 1]` or the two ratios sum to more than 1.
pub fn generate(configuration: &GeneratorConfiguration) -> Result<String> {
    validate_ratio("ocean_ratio", configuration.ocean_ratio)?;
    validate_ratio("infection_ratio", configuration.infection_ratio)?;

    if configuration.ocean_ratio + configuration.infection_ratio > 1.0 {
        return Err(invalid_parameter(
            "infection_ratio",
            &configuration.infection_ratio,
            &"ocean_ratio and infection_ratio must sum to at most 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(configuration.seed);
    let mut world = String::with_capacity(configuration.length);

    for _ in 0..configuration.length {
        let roll = rng.random::<f64>();
        let symbol = if roll < configuration.ocean_ratio {
            symbols::OCEAN
        } else if roll < configuration.ocean_ratio + configuration.infection_ratio {
            symbols::INFECTED
        } else {
            symbols::UNINFECTED
        };
        world.push(symbol);
    }

    Ok(world)
}

fn validate_ratio(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(parameter, &value, &"must lie within [0, 1]"))
    }
}
