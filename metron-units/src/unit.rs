//! The closed set of supported units

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Dimension;

/// NIST does not require a space between a value and the degree sign
pub const DEGREE_SYMBOL: &str = "°";

/// A physical unit of measure.
///
/// Serialized by variant name (e.g. `"Radian"`) so stored data survives
/// reordering of the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless identity, converts to and from every unit with ratio 1
    Scalar,
    Millimeter,
    Centimeter,
    Meter,
    Degree,
    Radian,
    Ratio,
    Percent,
    Hz,
    Second,
    Millisecond,

    Mile,
    Kilometer,

    // distance / time
    MetersPerSecond,
    MilesPerHour,
    KilometersPerHour,

    // time / distance
    MinutesPerMile,
    MinutesPerKilometer,
}

impl Unit {
    /// Every unit, in declaration order
    pub const ALL: [Unit; 18] = [
        Unit::Scalar,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Degree,
        Unit::Radian,
        Unit::Ratio,
        Unit::Percent,
        Unit::Hz,
        Unit::Second,
        Unit::Millisecond,
        Unit::Mile,
        Unit::Kilometer,
        Unit::MetersPerSecond,
        Unit::MilesPerHour,
        Unit::KilometersPerHour,
        Unit::MinutesPerMile,
        Unit::MinutesPerKilometer,
    ];

    /// The family this unit converts within
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Scalar => Dimension::Dimensionless,
            Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter
            | Unit::Kilometer
            | Unit::Mile => Dimension::Length,
            Unit::Degree | Unit::Radian => Dimension::Angle,
            Unit::Ratio | Unit::Percent => Dimension::Ratio,
            Unit::Hz | Unit::Second | Unit::Millisecond => Dimension::Time,
            Unit::MetersPerSecond | Unit::MilesPerHour | Unit::KilometersPerHour => Dimension::Speed,
            Unit::MinutesPerMile | Unit::MinutesPerKilometer => Dimension::Pace,
        }
    }

    /// Check if this unit belongs to the metric system
    pub fn is_metric(&self) -> bool {
        !matches!(self, Unit::Mile | Unit::MilesPerHour | Unit::MinutesPerMile)
    }

    /// Check if two units share a family (or one of them is `Scalar`)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension().is_compatible(&other.dimension())
    }

    /// Canonical token accepted by the parser.
    ///
    /// `Ratio` has no token of its own: it prints without a suffix and so
    /// reads back as `Scalar`.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Unit::Scalar => "",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Mile => "mi",
            Unit::Degree => DEGREE_SYMBOL,
            Unit::Radian => "rad",
            Unit::Ratio => return None,
            Unit::Percent => "%",
            Unit::Hz => "Hz",
            Unit::Second => "s",
            Unit::Millisecond => "ms",
            Unit::MetersPerSecond => "m/s",
            Unit::MilesPerHour => "mph",
            Unit::KilometersPerHour => "km/h",
            Unit::MinutesPerMile => "min/mi",
            Unit::MinutesPerKilometer => "min/km",
        };
        Some(symbol)
    }

    /// Suffix appended to the value when displaying a quantity
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Scalar | Unit::Ratio => "",
            Unit::Millimeter => " mm",
            Unit::Centimeter => " cm",
            Unit::Meter => " m",
            Unit::Kilometer => " km",
            Unit::Mile => " mi",
            Unit::Degree => DEGREE_SYMBOL,
            Unit::Radian => " rad",
            Unit::Percent => " %",
            Unit::Hz => " Hz",
            Unit::Second => " s",
            Unit::Millisecond => " ms",
            Unit::MetersPerSecond => " m/s",
            Unit::MilesPerHour => " mph",
            Unit::KilometersPerHour => " km/h",
            Unit::MinutesPerMile => " min/mi",
            Unit::MinutesPerKilometer => " min/km",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Scalar => "scalar",
            Unit::Millimeter => "millimeter",
            Unit::Centimeter => "centimeter",
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Mile => "mile",
            Unit::Degree => "degree",
            Unit::Radian => "radian",
            Unit::Ratio => "ratio",
            Unit::Percent => "percent",
            Unit::Hz => "hertz",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::MetersPerSecond => "meters per second",
            Unit::MilesPerHour => "miles per hour",
            Unit::KilometersPerHour => "kilometers per hour",
            Unit::MinutesPerMile => "minutes per mile",
            Unit::MinutesPerKilometer => "minutes per kilometer",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Scalar
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix().trim_start())
    }
}
