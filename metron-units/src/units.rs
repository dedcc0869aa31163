//! Symbol table - maps textual unit tokens to units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Dimension, Unit};

/// Global symbol registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all recognised unit symbols
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        tracing::debug!(
            symbols = registry.units.len(),
            aliases = registry.aliases.len(),
            "unit symbol registry built"
        );
        registry
    }

    /// Get a unit by symbol or alias. Lookup is case-sensitive.
    pub fn get(&self, symbol: &str) -> Option<Unit> {
        // Try direct lookup first
        if let Some(unit) = self.units.get(symbol) {
            return Some(*unit);
        }
        // Try alias lookup
        self.aliases
            .get(symbol)
            .and_then(|canonical| self.units.get(canonical))
            .copied()
    }

    /// Get all units in a family
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<Unit> {
        let mut units: Vec<Unit> = self.units.values()
            .copied()
            .filter(|u| u.dimension() == dimension)
            .collect();
        units.sort_by_key(|u| Unit::ALL.iter().position(|x| x == u));
        units
    }

    /// Get all canonical symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    fn register(&mut self, unit: Unit) {
        if let Some(symbol) = unit.symbol() {
            self.units.insert(symbol.to_string(), unit);
        }
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register(Unit::Scalar);
        self.register_length_units();
        self.register_angle_units();
        self.register_ratio_units();
        self.register_time_units();
        self.register_speed_units();
        self.register_pace_units();
    }

    fn register_length_units(&mut self) {
        self.register(Unit::Millimeter);
        self.register(Unit::Centimeter);
        self.register(Unit::Meter);
        self.register(Unit::Kilometer);
        self.register(Unit::Mile);
    }

    fn register_angle_units(&mut self) {
        self.register(Unit::Degree);
        self.register(Unit::Radian);

        self.alias("deg", "°");
    }

    fn register_ratio_units(&mut self) {
        // Ratio has no symbol of its own
        self.register(Unit::Percent);
    }

    fn register_time_units(&mut self) {
        self.register(Unit::Hz);
        self.register(Unit::Second);
        self.register(Unit::Millisecond);
    }

    fn register_speed_units(&mut self) {
        self.register(Unit::MetersPerSecond);
        self.register(Unit::MilesPerHour);
        self.register(Unit::KilometersPerHour);

        self.alias("mi/h", "mph");
        self.alias("kph", "km/h");
    }

    fn register_pace_units(&mut self) {
        self.register(Unit::MinutesPerMile);
        self.register(Unit::MinutesPerKilometer);

        // Pace is often written without the minutes, e.g. "7:30 /mi"
        self.alias("/mi", "min/mi");
        self.alias("/km", "min/km");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_registry() {
        let reg = UnitRegistry::new();

        // Test basic lookup
        assert_eq!(reg.get("mm"), Some(Unit::Millimeter));
        assert_eq!(reg.get("m/s"), Some(Unit::MetersPerSecond));
        assert_eq!(reg.get("min/mi"), Some(Unit::MinutesPerMile));
        assert_eq!(reg.get("°"), Some(Unit::Degree));
        assert_eq!(reg.get(""), Some(Unit::Scalar));

        // Test alias lookup
        assert_eq!(reg.get("deg"), Some(Unit::Degree));
        assert_eq!(reg.get("/km"), Some(Unit::MinutesPerKilometer));
        assert_eq!(reg.get("kph"), Some(Unit::KilometersPerHour));

        // Test unknown unit
        assert_eq!(reg.get("im"), None);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(UNITS.get("Hz"), Some(Unit::Hz));
        assert_eq!(UNITS.get("hz"), None);
        assert_eq!(UNITS.get("M"), None);
    }

    #[test]
    fn test_every_symbol_resolves_to_its_unit() {
        for unit in Unit::ALL {
            if let Some(symbol) = unit.symbol() {
                assert_eq!(UNITS.get(symbol), Some(unit), "{:?}", unit);
            }
        }
    }

    #[test]
    fn test_ratio_has_no_symbol() {
        assert!(!UNITS.symbols().iter().any(|s| UNITS.get(s) == Some(Unit::Ratio)));
    }

    #[test]
    fn test_by_dimension() {
        let length_units = UNITS.by_dimension(Dimension::Length);
        assert_eq!(
            length_units,
            vec![Unit::Millimeter, Unit::Centimeter, Unit::Meter, Unit::Mile, Unit::Kilometer]
        );

        for unit in UNITS.by_dimension(Dimension::Speed) {
            assert_eq!(unit.dimension(), Dimension::Speed);
        }
    }
}
