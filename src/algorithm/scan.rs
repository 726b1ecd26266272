//! Single-pass infection percentage computation
//!
//! Walks the map once, tracking the in-progress continent's population and
//! whether it has already seen an infected cell. Each ocean symbol folds the
//! finished continent into the aggregate statistics; the final continent is
//! folded when the map ends without a trailing ocean.
//!
//! Produces bit-for-bit the same value as the split formulation for every
//! input: both fold identical per-continent contributions through
//! [`PopulationStatistics`], which owns the percentage arithmetic.

use crate::analysis::statistics::PopulationStatistics;
use crate::map::symbols;

/// Percentage of the total land population that ends up infected
///
/// Single traversal with no segmentation pass. Returns exactly `0.0` for
/// maps without population (empty maps or pure ocean).
pub fn infected_percentage(world: &str) -> f64 {
    let mut statistics = PopulationStatistics::new();
    let mut continent_population = 0;
    let mut continent_infected = false;

    for symbol in world.chars() {
        if symbols::is_ocean(symbol) {
            statistics.record(continent_population, continent_infected);
            continent_population = 0;
            continent_infected = false;
        } else {
            continent_population += 1;
            continent_infected = continent_infected || symbols::is_infected(symbol);
        }
    }

    // The last continent has no closing ocean symbol
    statistics.record(continent_population, continent_infected);

    statistics.infected_percentage()
}
