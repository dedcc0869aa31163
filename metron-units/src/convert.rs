//! Conversion engine
//!
//! Every supported `(from, to)` pair has an entry in a table built once on
//! first use. Most entries are plain ratios. Reciprocal relationships
//! (frequency and period, pace and speed) cannot be written as a single
//! multiplier and are stored as small functions next to the ratios.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{SiPrefix, Unit, UnitError};

/// 1 mi = 1609.344 m (international mile)
pub const METERS_PER_MILE: f64 = 1609.344;
pub const KILOMETERS_PER_MILE: f64 = 1.609344;
/// 1 m/s in mph
pub const MPS_TO_MPH: f64 = 2.2369362920544;
/// 1 m/s in km/h
pub const MPS_TO_KPH: f64 = 3.6;
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Global conversion table
pub static CONVERSIONS: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::new);

/// How a value is re-expressed in another unit
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// `to = from * ratio`
    Ratio(f64),
    /// Value-dependent, e.g. `to = 1 / from`
    Function(fn(f64) -> f64),
}

impl Conversion {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::Ratio(ratio) => value * ratio,
            Conversion::Function(f) => f(value),
        }
    }

    /// The fixed multiplier, if this conversion has one
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Conversion::Ratio(ratio) => Some(*ratio),
            Conversion::Function(_) => None,
        }
    }
}

/// Lookup of every defined conversion keyed by `(from, to)`
pub struct ConversionTable {
    entries: HashMap<(Unit, Unit), Conversion>,
}

impl ConversionTable {
    pub fn new() -> Self {
        let mut table = ConversionTable {
            entries: HashMap::new(),
        };
        table.register_all();
        tracing::debug!(entries = table.entries.len(), "conversion table built");
        table
    }

    pub fn get(&self, from: Unit, to: Unit) -> Option<Conversion> {
        self.entries.get(&(from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ratio(&mut self, from: Unit, to: Unit, ratio: f64) {
        self.entries.insert((from, to), Conversion::Ratio(ratio));
    }

    fn function(&mut self, from: Unit, to: Unit, f: fn(f64) -> f64) {
        self.entries.insert((from, to), Conversion::Function(f));
    }

    fn register_all(&mut self) {
        self.register_identities();
        self.register_length();
        self.register_angle();
        self.register_ratio();
        self.register_time();
        self.register_speed();
        self.register_pace();
        self.register_pace_speed();
    }

    fn register_identities(&mut self) {
        for unit in Unit::ALL {
            self.ratio(unit, unit, 1.0);

            // Scalar is an escape hatch, not dimensionally checked
            self.ratio(Unit::Scalar, unit, 1.0);
            self.ratio(unit, Unit::Scalar, 1.0);
        }
    }

    fn register_length(&mut self) {
        let metric = [
            (Unit::Millimeter, SiPrefix::Milli),
            (Unit::Centimeter, SiPrefix::Centi),
            (Unit::Meter, SiPrefix::None),
            (Unit::Kilometer, SiPrefix::Kilo),
        ];

        for (from, from_prefix) in metric {
            for (to, to_prefix) in metric {
                self.ratio(from, to, SiPrefix::ratio(from_prefix, to_prefix));
            }

            // Mile goes through the meter
            self.ratio(Unit::Mile, from, METERS_PER_MILE * SiPrefix::ratio(SiPrefix::None, from_prefix));
            self.ratio(from, Unit::Mile, SiPrefix::ratio(from_prefix, SiPrefix::None) / METERS_PER_MILE);
        }
    }

    fn register_angle(&mut self) {
        self.ratio(Unit::Radian, Unit::Degree, 180.0 / std::f64::consts::PI);
        self.ratio(Unit::Degree, Unit::Radian, std::f64::consts::PI / 180.0);
    }

    fn register_ratio(&mut self) {
        self.ratio(Unit::Ratio, Unit::Percent, 100.0);
        self.ratio(Unit::Percent, Unit::Ratio, 1.0 / 100.0);
    }

    fn register_time(&mut self) {
        self.ratio(Unit::Second, Unit::Millisecond, SiPrefix::ratio(SiPrefix::None, SiPrefix::Milli));
        self.ratio(Unit::Millisecond, Unit::Second, SiPrefix::ratio(SiPrefix::Milli, SiPrefix::None));

        // Frequency and period are reciprocal
        self.function(Unit::Hz, Unit::Second, inverse);
        self.function(Unit::Second, Unit::Hz, inverse);

        // ms -> s -> Hz
        self.function(Unit::Millisecond, Unit::Hz, |v| {
            inverse(v * SiPrefix::ratio(SiPrefix::Milli, SiPrefix::None))
        });
        // Hz -> s -> ms
        self.function(Unit::Hz, Unit::Millisecond, |v| {
            inverse(v) * SiPrefix::ratio(SiPrefix::None, SiPrefix::Milli)
        });
    }

    fn register_speed(&mut self) {
        self.ratio(Unit::MetersPerSecond, Unit::MilesPerHour, MPS_TO_MPH);
        self.ratio(Unit::MilesPerHour, Unit::MetersPerSecond, 1.0 / MPS_TO_MPH);

        self.ratio(Unit::MetersPerSecond, Unit::KilometersPerHour, MPS_TO_KPH);
        self.ratio(Unit::KilometersPerHour, Unit::MetersPerSecond, 1.0 / MPS_TO_KPH);

        self.ratio(Unit::MilesPerHour, Unit::KilometersPerHour, KILOMETERS_PER_MILE);
        self.ratio(Unit::KilometersPerHour, Unit::MilesPerHour, 1.0 / KILOMETERS_PER_MILE);
    }

    fn register_pace(&mut self) {
        // A mile takes longer than a kilometer
        self.ratio(Unit::MinutesPerMile, Unit::MinutesPerKilometer, 1.0 / KILOMETERS_PER_MILE);
        self.ratio(Unit::MinutesPerKilometer, Unit::MinutesPerMile, KILOMETERS_PER_MILE);
    }

    /// Pace -> speed scales into min/km, inverts to km/h, then scales to the
    /// target. Speed -> pace scales into km/h, inverts to min/km, then scales.
    fn register_pace_speed(&mut self) {
        self.function(Unit::MinutesPerKilometer, Unit::KilometersPerHour, per_hour);
        self.function(Unit::MinutesPerKilometer, Unit::MetersPerSecond, |v| {
            per_hour(v) / MPS_TO_KPH
        });
        self.function(Unit::MinutesPerKilometer, Unit::MilesPerHour, |v| {
            per_hour(v) / KILOMETERS_PER_MILE
        });

        self.function(Unit::MinutesPerMile, Unit::MilesPerHour, per_hour);
        self.function(Unit::MinutesPerMile, Unit::KilometersPerHour, |v| {
            per_hour(v / KILOMETERS_PER_MILE)
        });
        self.function(Unit::MinutesPerMile, Unit::MetersPerSecond, |v| {
            per_hour(v / KILOMETERS_PER_MILE) / MPS_TO_KPH
        });

        self.function(Unit::KilometersPerHour, Unit::MinutesPerKilometer, per_hour);
        self.function(Unit::MetersPerSecond, Unit::MinutesPerKilometer, |v| {
            per_hour(v * MPS_TO_KPH)
        });
        self.function(Unit::MilesPerHour, Unit::MinutesPerKilometer, |v| {
            per_hour(v * KILOMETERS_PER_MILE)
        });

        self.function(Unit::MilesPerHour, Unit::MinutesPerMile, per_hour);
        self.function(Unit::KilometersPerHour, Unit::MinutesPerMile, |v| {
            per_hour(v) * KILOMETERS_PER_MILE
        });
        self.function(Unit::MetersPerSecond, Unit::MinutesPerMile, |v| {
            per_hour(v * MPS_TO_KPH) * KILOMETERS_PER_MILE
        });
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn inverse(value: f64) -> f64 {
    1.0 / value
}

/// min/km <-> km/h (and min/mi <-> mph); the relation is its own inverse
fn per_hour(value: f64) -> f64 {
    MINUTES_PER_HOUR / value
}

/// Get the fixed ratio converting `from` into `to`.
///
/// Fails for pairs with no relationship and for value-dependent pairs
/// such as `Hz` and `Second`, which have no single multiplier.
pub fn ratio(from: Unit, to: Unit) -> Result<f64, UnitError> {
    conversion(from, to)?
        .ratio()
        .ok_or_else(|| UnitError::unsupported(from, to))
}

/// Get the conversion between two units
pub fn conversion(from: Unit, to: Unit) -> Result<Conversion, UnitError> {
    CONVERSIONS.get(from, to).ok_or_else(|| {
        tracing::debug!(?from, ?to, "unsupported conversion");
        UnitError::unsupported(from, to)
    })
}

/// Check whether a conversion exists between two units
pub fn is_convertible(from: Unit, to: Unit) -> bool {
    CONVERSIONS.get(from, to).is_some()
}

/// Convert a value between units.
///
/// Converting a unit to itself returns `value` untouched.
pub fn convert(from: Unit, to: Unit, value: f64) -> Result<f64, UnitError> {
    if from == to {
        return Ok(value);
    }
    let converted = conversion(from, to)?.apply(value);
    tracing::trace!(?from, ?to, value, converted, "converted");
    Ok(converted)
}
