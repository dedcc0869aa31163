//! Errors raised by parsing and conversion
//!
//! Every error names the offending input so the caller can act on it:
//! the original text for parse failures, both unit tags for conversions.

use thiserror::Error;
use crate::Unit;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
}

/// Errors that can occur while parsing or converting quantities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// No leading numeric literal could be extracted
    #[error("could not parse '{input}'")]
    Unparsable { input: String },

    /// A number was found but the trailing token is not a registered symbol
    #[error("unknown unit symbol '{symbol}' in '{input}'")]
    UnknownSymbol { symbol: String, input: String },

    /// No ratio or conversion function exists between the two units
    #[error("cannot convert from Unit.{from:?} to Unit.{to:?}")]
    UnsupportedConversion { from: Unit, to: Unit },
}

impl UnitError {
    pub fn unparsable(input: impl Into<String>) -> Self {
        UnitError::Unparsable { input: input.into() }
    }

    pub fn unknown_symbol(symbol: impl Into<String>, input: impl Into<String>) -> Self {
        UnitError::UnknownSymbol {
            symbol: symbol.into(),
            input: input.into(),
        }
    }

    pub fn unsupported(from: Unit, to: Unit) -> Self {
        UnitError::UnsupportedConversion { from, to }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::Unparsable { .. } => codes::PARSE_ERROR,
            UnitError::UnknownSymbol { .. } => codes::UNKNOWN_UNIT,
            UnitError::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
        }
    }
}
