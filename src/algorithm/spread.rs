//! Whole-continent contagion spread
//!
//! Computes the end state of the pandemic: every continent containing at
//! least one infected cell collapses to fully infected, clean continents and
//! ocean positions are preserved in place.

use crate::map::symbols;

/// Map the world to its state after infection has finished spreading
///
/// The result has the same length and ocean positions as the input, with
/// every cell of an infected continent replaced by the infected symbol.
/// Applying the spread twice yields the same map as applying it once, and
/// the infected percentage of the result equals that of the input.
pub fn spread_infection(world: &str) -> String {
    let mut result = String::with_capacity(world.len());
    let mut first = true;

    for run in world.split(symbols::OCEAN) {
        if !first {
            result.push(symbols::OCEAN);
        }
        first = false;

        if run.contains(symbols::INFECTED) {
            result.extend(std::iter::repeat_n(symbols::INFECTED, run.chars().count()));
        } else {
            result.push_str(run);
        }
    }

    result
}
