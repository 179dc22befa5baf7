//! City treasury and population counters

/// A treasury at exactly zero is bumped to this floor before accrual so the
/// multiplicative growth can't stay stuck at nothing.
pub const ZERO_FLOOR: f64 = 0.01;

/// Per-building accrual rate, scaled by population and tax
pub const BUILDING_RATE: f64 = 0.0001;

/// Trickle income paid every tick regardless of the city
pub const BASE_INCOME: f64 = 0.0001;

#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    /// Currency in the treasury
    pub dosh: f64,
    /// Number of people in the world, recounted after every tick
    pub population: usize,
    /// Housing capacity; raised by each placed building's yield
    pub population_max: usize,
    pub tax: f64,
}

impl Economy {
    pub fn new(starting_dosh: f64, tax: f64) -> Self {
        Self {
            dosh: starting_dosh,
            population: 0,
            population_max: 0,
            tax,
        }
    }

    /// Per-tick income: `population * tax * (BUILDING_RATE * buildings) + BASE_INCOME`
    pub fn accrue(&mut self, building_count: usize) {
        if self.dosh == 0.0 {
            self.dosh = ZERO_FLOOR;
        }
        self.dosh += self.population as f64 * self.tax * (BUILDING_RATE * building_count as f64) + BASE_INCOME;
    }

    /// Add income from gameplay (coins). Negative or NaN amounts are ignored.
    pub fn credit(&mut self, amount: f64) {
        if amount > 0.0 {
            self.dosh += amount;
        }
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.dosh >= cost
    }

    /// Whether a taxi should bother bringing anyone
    pub fn has_vacancy(&self) -> bool {
        self.population_max > self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_city_earns_base_income() {
        let mut economy = Economy::new(5.0, 1.05);
        economy.accrue(0);
        assert!((economy.dosh - 5.0001).abs() < 1e-12);
    }

    #[test]
    fn test_accrual_scales_with_population_and_buildings() {
        let mut economy = Economy::new(0.5, 2.0);
        economy.population = 10;
        economy.accrue(3);
        // 10 * 2.0 * (0.0001 * 3) + 0.0001 = 0.0061
        assert!((economy.dosh - 0.5061).abs() < 1e-12);
    }

    #[test]
    fn test_zero_treasury_is_floored_first() {
        let mut economy = Economy::new(0.0, 1.05);
        economy.accrue(0);
        assert!((economy.dosh - (ZERO_FLOOR + BASE_INCOME)).abs() < 1e-12);
    }

    #[test]
    fn test_accrual_never_decreases_dosh() {
        let mut economy = Economy::new(1.0, 1.05);
        economy.population = 3;
        let mut last = economy.dosh;
        for buildings in 0..50 {
            economy.accrue(buildings);
            assert!(economy.dosh >= last);
            last = economy.dosh;
        }
    }

    #[test]
    fn test_credit_ignores_negative() {
        let mut economy = Economy::new(1.0, 1.05);
        economy.credit(-5.0);
        economy.credit(f64::NAN);
        assert_eq!(economy.dosh, 1.0);
        economy.credit(2.5);
        assert_eq!(economy.dosh, 3.5);
    }

    #[test]
    fn test_vacancy() {
        let mut economy = Economy::new(0.0, 1.0);
        assert!(!economy.has_vacancy());
        economy.population_max = 2;
        economy.population = 1;
        assert!(economy.has_vacancy());
    }
}
