//! Tests for the population statistics accumulator

#[cfg(test)]
mod tests {
    use crate::analysis::statistics::PopulationStatistics;

    #[test]
    fn test_zero_population_avoids_division() {
        let statistics = PopulationStatistics::new();
        assert!(statistics.infected_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_infected_continent_contributes_full_length() {
        let mut statistics = PopulationStatistics::new();
        statistics.record(8, true);
        statistics.record(3, false);
        statistics.record(4, true);

        assert_eq!(statistics.population, 15);
        assert_eq!(statistics.infected, 12);
        assert!((statistics.infected_percentage() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_records_are_inert() {
        let mut statistics = PopulationStatistics::new();
        statistics.record(0, false);
        statistics.record(0, true);

        assert_eq!(statistics.population, 0);
        assert_eq!(statistics.infected, 0);
        assert!(statistics.infected_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_infected_never_exceeds_population() {
        let mut statistics = PopulationStatistics::new();
        statistics.record(5, true);
        statistics.record(2, true);

        assert!(statistics.infected <= statistics.population);
        assert!((statistics.infected_percentage() - 100.0).abs() < f64::EPSILON);
    }
}
