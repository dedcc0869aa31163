//! Quantity string parsing - "1.23 m", "-143e-2rad", "7:30 min/mi"
//!
//! Numbers use invariant rules: `.` is the only decimal separator and
//! thousands separators are not accepted.

use std::sync::LazyLock;
use regex::Regex;
use crate::units::UNITS;
use crate::{Quantity, Unit, UnitError};

/// sign, digits, optional fraction and exponent, optional space, unit token
static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?[0-9]+\.?[0-9]*(?:[eE][-+]?[0-9]+)?)\s*([\w/°%]+)?")
        .expect("quantity pattern is valid")
});

/// [h:]mm:ss followed by a pace unit
static PACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]{1,2}):)?([0-9]{1,2}):([0-9]{2})\s*(min/mi|min/km|/mi|/km)$")
        .expect("pace pattern is valid")
});

/// The raw pieces of a quantity string, before the symbol is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedQuantity<'a> {
    /// The full input
    pub input: &'a str,
    /// Numeric literal, e.g. "-1.43e0"
    pub number: &'a str,
    /// Unit token, empty when absent
    pub symbol: &'a str,
}

impl<'a> ParsedQuantity<'a> {
    /// Split the first quantity in `input` into number and symbol.
    /// Anything after the unit token is ignored.
    pub fn parse(input: &'a str) -> Result<Self, UnitError> {
        let captures = QUANTITY_PATTERN
            .captures(input.trim_start())
            .ok_or_else(|| {
                tracing::debug!(input, "no leading number");
                UnitError::unparsable(input)
            })?;

        let number = captures.get(1).map_or("", |m| m.as_str());
        let symbol = captures.get(2).map_or("", |m| m.as_str());

        Ok(ParsedQuantity { input, number, symbol })
    }

    pub fn value(&self) -> Result<f64, UnitError> {
        self.number
            .parse::<f64>()
            .map_err(|_| UnitError::unparsable(self.input))
    }

    pub fn unit(&self) -> Result<Unit, UnitError> {
        UNITS.get(self.symbol).ok_or_else(|| {
            tracing::debug!(symbol = self.symbol, input = self.input, "unknown unit symbol");
            UnitError::unknown_symbol(self.symbol, self.input)
        })
    }

    pub fn to_quantity(&self) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(self.value()?, self.unit()?))
    }
}

/// The raw pieces of a pace string such as "1:05:30 min/km"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPace<'a> {
    pub input: &'a str,
    /// Absent for "mm:ss" forms
    pub hours: Option<&'a str>,
    pub minutes: &'a str,
    pub seconds: &'a str,
    pub symbol: &'a str,
}

impl<'a> ParsedPace<'a> {
    pub fn parse(input: &'a str) -> Result<Self, UnitError> {
        let captures = PACE_PATTERN
            .captures(input.trim())
            .ok_or_else(|| {
                tracing::debug!(input, "not a pace");
                UnitError::unparsable(input)
            })?;

        Ok(ParsedPace {
            input,
            hours: captures.get(1).map(|m| m.as_str()),
            minutes: captures.get(2).map_or("", |m| m.as_str()),
            seconds: captures.get(3).map_or("", |m| m.as_str()),
            symbol: captures.get(4).map_or("", |m| m.as_str()),
        })
    }

    /// Total minutes: `h * 60 + m + s / 60`
    pub fn minutes(&self) -> Result<f64, UnitError> {
        let field = |s: &str| s.parse::<f64>().map_err(|_| UnitError::unparsable(self.input));

        let hours = match self.hours {
            Some(h) => field(h)?,
            None => 0.0,
        };
        Ok(hours * 60.0 + field(self.minutes)? + field(self.seconds)? / 60.0)
    }

    pub fn unit(&self) -> Result<Unit, UnitError> {
        UNITS
            .get(self.symbol)
            .ok_or_else(|| UnitError::unknown_symbol(self.symbol, self.input))
    }

    pub fn to_quantity(&self) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(self.minutes()?, self.unit()?))
    }
}

/// Parse the first quantity in a string like "1001 mm" or "-1.43°"
pub fn parse_quantity(s: &str) -> Result<Quantity, UnitError> {
    ParsedQuantity::parse(s)?.to_quantity()
}

/// Parse a pace like "7:30 min/mi", "1:02:03 /km" into minutes per distance
pub fn parse_pace(s: &str) -> Result<Quantity, UnitError> {
    ParsedPace::parse(s)?.to_quantity()
}

/// Look up a bare unit symbol like "m/s" or "deg"
pub fn parse_unit(symbol: &str) -> Result<Unit, UnitError> {
    UNITS
        .get(symbol.trim())
        .ok_or_else(|| UnitError::unknown_symbol(symbol.trim(), symbol))
}
