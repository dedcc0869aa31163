//! Unit families
//!
//! Units convert only within their family. `Dimensionless` holds the
//! `Scalar` identity unit, which converts to and from anything.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The family a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Identity, not dimensionally checked
    Dimensionless,
    /// mm, cm, m, km, mi
    Length,
    /// deg, rad
    Angle,
    /// ratio, percent
    Ratio,
    /// Hz and its reciprocal periods (s, ms)
    Time,
    /// Distance over time
    Speed,
    /// Time over distance, the reciprocal of speed
    Pace,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Dimensionless,
        Dimension::Length,
        Dimension::Angle,
        Dimension::Ratio,
        Dimension::Time,
        Dimension::Speed,
        Dimension::Pace,
    ];

    /// Lowercase family name
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Dimensionless => "dimensionless",
            Dimension::Length => "length",
            Dimension::Angle => "angle",
            Dimension::Ratio => "ratio",
            Dimension::Time => "time",
            Dimension::Speed => "speed",
            Dimension::Pace => "pace",
        }
    }

    /// Check if this is the dimensionless family
    pub fn is_dimensionless(&self) -> bool {
        matches!(self, Dimension::Dimensionless)
    }

    /// Whether values of `self` can in principle be re-expressed in `other`.
    ///
    /// Speed and pace are reciprocal views of the same motion, so they are
    /// compatible even though they are distinct families.
    pub fn is_compatible(&self, other: &Dimension) -> bool {
        if self.is_dimensionless() || other.is_dimensionless() || self == other {
            return true;
        }
        matches!(
            (self, other),
            (Dimension::Speed, Dimension::Pace) | (Dimension::Pace, Dimension::Speed)
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Dimensionless
    }
}
