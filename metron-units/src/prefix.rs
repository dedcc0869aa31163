//! SI prefixes used to derive metric length and time ratios

use serde::{Serialize, Deserialize};

/// A power-of-ten SI multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiPrefix {
    Giga,
    Mega,
    Kilo,
    /// No prefix, e.g. "meters"
    None,
    Centi,
    Milli,
    Micro,
    Nano,
}

impl SiPrefix {
    pub const ALL: [SiPrefix; 8] = [
        SiPrefix::Giga,
        SiPrefix::Mega,
        SiPrefix::Kilo,
        SiPrefix::None,
        SiPrefix::Centi,
        SiPrefix::Milli,
        SiPrefix::Micro,
        SiPrefix::Nano,
    ];

    /// The multiplier as a power of ten
    pub const fn value(self) -> f64 {
        match self {
            SiPrefix::Giga => 1e9,
            SiPrefix::Mega => 1e6,
            SiPrefix::Kilo => 1e3,
            SiPrefix::None => 1e0,
            SiPrefix::Centi => 1e-2,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Nano => 1e-9,
        }
    }

    /// Ratio converting a value expressed with `from` into one expressed with `to`,
    /// e.g. `ratio(Milli, None) == 1e-3`
    pub fn ratio(from: SiPrefix, to: SiPrefix) -> f64 {
        from.value() / to.value()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SiPrefix::Giga => "G",
            SiPrefix::Mega => "M",
            SiPrefix::Kilo => "k",
            SiPrefix::None => "",
            SiPrefix::Centi => "c",
            SiPrefix::Milli => "m",
            SiPrefix::Micro => "µ",
            SiPrefix::Nano => "n",
        }
    }
}
