//! Split-based infection percentage computation
//!
//! Segments the map into continents up front, then folds each continent's
//! population and infection status into the aggregate statistics. The
//! segmentation borrows from the input, so no per-continent allocation
//! takes place.

use crate::analysis::statistics::PopulationStatistics;
use crate::map::continents;

/// Percentage of the total land population that ends up infected
///
/// Ocean-separated continents are independent; one infected cell infects
/// the whole continent it lives on. Returns exactly `0.0` for maps without
/// population (empty maps or pure ocean).
pub fn infected_percentage(world: &str) -> f64 {
    let mut statistics = PopulationStatistics::new();

    for continent in continents(world) {
        statistics.record(continent.population(), continent.infected());
    }

    statistics.infected_percentage()
}
