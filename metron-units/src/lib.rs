//! Metron Units - Quantities over a closed set of units
//!
//! A `Quantity` couples an `f64` with a `Unit`. Changing the unit converts
//! the value; there is no way to set one without the other.
//!
//! Families:
//! - Length (mm, cm, m, km, mi)
//! - Angle (°, rad)
//! - Ratio (ratio, %)
//! - Time (Hz, s, ms) - frequency and period convert reciprocally
//! - Speed (m/s, mph, km/h)
//! - Pace (min/mi, min/km) - the reciprocal of speed
//!
//! `Scalar` is dimensionless and converts to and from every unit.
//!
//! ```
//! use metron_units::{Quantity, Unit};
//!
//! let q: Quantity = "1500 mm".parse().unwrap();
//! assert_eq!(q.to(Unit::Meter).unwrap().to_string(), "1.5 m");
//! assert!(q == Quantity::new(150.0, Unit::Centimeter));
//! ```

mod error;
mod dimension;
mod unit;
mod prefix;
mod units;
mod convert;
mod quantity;
mod parse;

pub use error::{UnitError, codes};
pub use dimension::Dimension;
pub use unit::{Unit, DEGREE_SYMBOL};
pub use prefix::SiPrefix;
pub use units::{UnitRegistry, UNITS};
pub use convert::{
    convert, conversion, is_convertible, ratio, Conversion, ConversionTable, CONVERSIONS,
    KILOMETERS_PER_MILE, METERS_PER_MILE, MINUTES_PER_HOUR, MPS_TO_KPH, MPS_TO_MPH,
};
pub use quantity::{Quantity, DEFAULT_TOLERANCE};
pub use parse::{parse_pace, parse_quantity, parse_unit, ParsedPace, ParsedQuantity};
