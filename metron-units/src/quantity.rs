//! Quantity type - a value with an associated unit

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::convert::convert;
use crate::parse::parse_quantity;
use crate::{Dimension, Unit, UnitError};

/// Absolute tolerance used by `==` to absorb round-off from unit conversion
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// A numeric value paired with a unit.
///
/// The value is always expressed in the current unit. The fields are private
/// so the unit can only change through [`Quantity::set_unit`], which converts
/// the value at the same time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a new quantity; no conversion takes place
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Create a dimensionless quantity (pure number)
    pub fn scalar(value: f64) -> Self {
        Quantity::new(value, Unit::Scalar)
    }

    /// The numeric value, expressed in [`Quantity::unit`]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Check if two quantities can be compared or converted into each other
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Re-express this quantity in `target`, converting the value in place.
    ///
    /// Does nothing if `target` is already the current unit. On error the
    /// quantity is left untouched.
    pub fn set_unit(&mut self, target: Unit) -> Result<(), UnitError> {
        if self.unit == target {
            return Ok(());
        }

        self.value = convert(self.unit, target, self.value)?;
        self.unit = target;
        Ok(())
    }

    /// Return a copy converted to `target`. Does not modify `self`.
    pub fn to(&self, target: Unit) -> Result<Quantity, UnitError> {
        let mut converted = *self;
        converted.set_unit(target)?;
        Ok(converted)
    }

    /// The value this quantity has when expressed in `target`
    pub fn value_in(&self, target: Unit) -> Result<f64, UnitError> {
        Ok(self.to(target)?.value)
    }

    pub fn millimeters(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Millimeter)
    }

    pub fn centimeters(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Centimeter)
    }

    pub fn meters(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Meter)
    }

    pub fn kilometers(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Kilometer)
    }

    pub fn miles(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Mile)
    }

    pub fn degrees(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Degree)
    }

    pub fn radians(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Radian)
    }

    pub fn percent(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Percent)
    }

    pub fn ratio(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Ratio)
    }

    pub fn hertz(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Hz)
    }

    pub fn seconds(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Second)
    }

    pub fn milliseconds(&self) -> Result<f64, UnitError> {
        self.value_in(Unit::Millisecond)
    }

    /// `other` expressed in this quantity's unit
    fn rhs(&self, other: &Quantity) -> Result<f64, UnitError> {
        other.value_in(self.unit)
    }

    /// Compare for equality within an absolute `tolerance`, after converting
    /// `other` into this quantity's unit
    pub fn approx_eq(&self, other: &Quantity, tolerance: f64) -> Result<bool, UnitError> {
        Ok((self.value - self.rhs(other)?).abs() < tolerance)
    }

    /// Equality with [`DEFAULT_TOLERANCE`]
    pub fn try_eq(&self, other: &Quantity) -> Result<bool, UnitError> {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }

    // The ordering checks are exact. Two values inside the equality band
    // can compare unequal here while `try_eq` reports them equal.

    pub fn try_lt(&self, other: &Quantity) -> Result<bool, UnitError> {
        Ok(self.value < self.rhs(other)?)
    }

    pub fn try_le(&self, other: &Quantity) -> Result<bool, UnitError> {
        Ok(self.value <= self.rhs(other)?)
    }

    pub fn try_gt(&self, other: &Quantity) -> Result<bool, UnitError> {
        Ok(self.value > self.rhs(other)?)
    }

    pub fn try_ge(&self, other: &Quantity) -> Result<bool, UnitError> {
        Ok(self.value >= self.rhs(other)?)
    }

    /// Three-way comparison. Values that are neither less nor greater
    /// (including NaN) compare `Equal`.
    pub fn try_cmp(&self, other: &Quantity) -> Result<Ordering, UnitError> {
        let rhs = self.rhs(other)?;
        let ordering = if rhs < self.value {
            Ordering::Greater
        } else if rhs > self.value {
            Ordering::Less
        } else {
            Ordering::Equal
        };
        Ok(ordering)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}{}", precision, self.value, self.unit.suffix()),
            None => write!(f, "{}{}", self.value, self.unit.suffix()),
        }
    }
}

impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

/// Tolerant equality; quantities whose units cannot be converted are unequal
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

/// Exact ordering after conversion; `None` if the units cannot be converted
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let rhs = self.rhs(other).ok()?;
        self.value.partial_cmp(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_quantity_creation() {
        let q = Quantity::new(1.001, Unit::Meter);
        assert_eq!(q.value(), 1.001);
        assert_eq!(q.unit(), Unit::Meter);
        assert_eq!(q.dimension(), Dimension::Length);
    }

    #[test]
    fn test_copy() {
        let q = Quantity::new(1.001, Unit::Radian);
        let copy = q;
        assert_eq!(copy.value(), q.value());
        assert_eq!(copy.unit(), q.unit());
    }

    #[test]
    fn test_set_unit_converts() {
        let mut q = Quantity::new(1.001, Unit::Meter);
        q.set_unit(Unit::Millimeter).unwrap();
        assert_eq!(q.unit(), Unit::Millimeter);
        assert_abs_diff_eq!(q.value(), 1001.0, epsilon = 1e-12);

        q.set_unit(Unit::Centimeter).unwrap();
        assert_abs_diff_eq!(q.value(), 100.1, epsilon = 1e-12);
    }

    #[test]
    fn test_set_unit_same_unit_is_noop() {
        let mut q = Quantity::new(1.001, Unit::Meter);
        q.set_unit(Unit::Meter).unwrap();
        assert_eq!(q.value(), 1.001);
    }

    #[test]
    fn test_set_unit_failure_leaves_quantity_untouched() {
        let mut q = Quantity::new(1.001, Unit::Meter);
        let err = q.set_unit(Unit::Hz).unwrap_err();
        assert_eq!(err, UnitError::unsupported(Unit::Meter, Unit::Hz));
        assert_eq!(q.value(), 1.001);
        assert_eq!(q.unit(), Unit::Meter);
    }

    #[test]
    fn test_reciprocal_set_unit() {
        let mut q = Quantity::new(5.0, Unit::Hz);
        q.set_unit(Unit::Millisecond).unwrap();
        assert_abs_diff_eq!(q.value(), 200.0, epsilon = 1e-12);

        let mut q = Quantity::new(200.0, Unit::Millisecond);
        q.set_unit(Unit::Hz).unwrap();
        assert_eq!(q.value(), 5.0);
    }

    #[test]
    fn test_to_converts() {
        let m = Quantity::new(1.001, Unit::Meter);
        let mm = m.to(Unit::Millimeter).unwrap();
        assert_abs_diff_eq!(mm.value(), 1001.0, epsilon = 1e-12);
        assert_eq!(mm.unit(), Unit::Millimeter);
    }

    #[test]
    fn test_to_does_not_modify_source() {
        let m = Quantity::new(1.001, Unit::Meter);
        let _ = m.to(Unit::Millimeter).unwrap();
        assert_eq!(m.value(), 1.001);
        assert_eq!(m.unit(), Unit::Meter);
    }

    #[test]
    fn test_accessors() {
        assert_abs_diff_eq!(Quantity::new(1.001, Unit::Meter).meters().unwrap(), 1.001, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(1.001, Unit::Centimeter).centimeters().unwrap(), 1.001, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(1.001, Unit::Millimeter).millimeters().unwrap(), 1.001, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(1.001, Unit::Radian).radians().unwrap(), 1.001, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(1.001, Unit::Degree).degrees().unwrap(), 1.001, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(1.001, Unit::Percent).percent().unwrap(), 1.001, epsilon = 1e-12);

        assert_abs_diff_eq!(Quantity::new(1.0, Unit::Meter).millimeters().unwrap(), 1000.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(180.0, Unit::Degree).radians().unwrap(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(25.0, Unit::Percent).ratio().unwrap(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(Quantity::new(1.0, Unit::Mile).kilometers().unwrap(), 1.609344, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(4.0, Unit::Hz).seconds().unwrap(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(Quantity::new(0.25, Unit::Second).hertz().unwrap(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(2.0, Unit::Second).milliseconds().unwrap(), 2000.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantity::new(1609.344, Unit::Meter).miles().unwrap(), 1.0, epsilon = 1e-12);

        assert!(Quantity::new(1.0, Unit::Hz).meters().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(1.0, Unit::Meter).to_string(), "1 m");
        assert_eq!(format!("{}", Quantity::new(1.0, Unit::Centimeter)), "1 cm");
        assert_eq!(format!("{}", Quantity::new(1.0, Unit::Millimeter)), "1 mm");
        assert_eq!(format!("{}", Quantity::new(1.0, Unit::Degree)), "1°");
        assert_eq!(format!("{}", Quantity::new(1.0, Unit::Radian)), "1 rad");
        assert_eq!(format!("{}", Quantity::new(-1.5, Unit::Hz)), "-1.5 Hz");
        assert_eq!(format!("{}", Quantity::new(0.25, Unit::Ratio)), "0.25");
        assert_eq!(format!("{}", Quantity::scalar(1234567.5)), "1234567.5");
        assert_eq!(format!("{}", Quantity::new(8.0, Unit::MinutesPerMile)), "8 min/mi");
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", Quantity::new(PI, Unit::Radian)), "3.14 rad");
        assert_eq!(format!("{:.0}", Quantity::new(89.6, Unit::Degree)), "90°");
    }

    #[test]
    fn test_from_str() {
        let q: Quantity = "1001 mm".parse().unwrap();
        assert_eq!(q.value(), 1001.0);
        assert_eq!(q.unit(), Unit::Millimeter);

        assert!("metres".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_equality_tolerance() {
        let q = Quantity::new(1.23, Unit::Meter);
        let equal = Quantity::new(1.23 + 1e-13, Unit::Meter);
        let unequal = Quantity::new(1.23 + 1e-11, Unit::Meter);

        assert!(equal == q);
        assert!(q == equal);
        assert!(unequal != q);
        assert!(q.try_eq(&equal).unwrap());
        assert!(!q.try_eq(&unequal).unwrap());
    }

    #[test]
    fn test_equality_different_units() {
        let q = Quantity::new(1.23, Unit::Meter);
        let equal = Quantity::new(123.0 + 1e-11, Unit::Centimeter);
        let unequal = Quantity::new(123.0 + 1e-9, Unit::Centimeter);

        assert!(q == equal);
        assert!(q != unequal);
    }

    #[test]
    fn test_approx_eq_custom_tolerance() {
        let q = Quantity::new(1.0, Unit::Meter);
        let close = Quantity::new(1001.0, Unit::Millimeter);
        assert!(!q.try_eq(&close).unwrap());
        assert!(q.approx_eq(&close, 0.01).unwrap());
    }

    #[test]
    fn test_equality_incompatible_units() {
        let m = Quantity::new(1.0, Unit::Meter);
        let hz = Quantity::new(1.0, Unit::Hz);

        assert!(m != hz);
        assert_eq!(m.try_eq(&hz).unwrap_err(), UnitError::unsupported(Unit::Hz, Unit::Meter));
        assert_eq!(m.partial_cmp(&hz), None);
        assert!(m.try_cmp(&hz).is_err());
    }

    #[test]
    fn test_greater_or_equal() {
        let q = Quantity::new(1.23, Unit::Meter);
        let equal = Quantity::new(1.23, Unit::Meter);
        let less = Quantity::new(1.23 - 1e-11, Unit::Meter);
        let greater = Quantity::new(1.23 + 1e-11, Unit::Meter);

        assert!(equal >= q);
        assert!(!(less >= q));
        assert!(greater >= q);
        assert!(greater.try_ge(&q).unwrap());
    }

    #[test]
    fn test_greater() {
        let q = Quantity::new(1.23, Unit::Meter);
        let equal = Quantity::new(1.23, Unit::Meter);
        let less = Quantity::new(1.23 - 1e-11, Unit::Meter);
        let greater = Quantity::new(1.23 + 1e-11, Unit::Meter);

        assert!(!(equal > q));
        assert!(!(less > q));
        assert!(greater > q);
        assert!(!less.try_gt(&q).unwrap());
    }

    #[test]
    fn test_less_or_equal() {
        let q = Quantity::new(1.23, Unit::Meter);
        let equal = Quantity::new(1.23, Unit::Meter);
        let less = Quantity::new(1.23 - 1e-11, Unit::Meter);
        let greater = Quantity::new(1.23 + 1e-11, Unit::Meter);

        assert!(equal <= q);
        assert!(less <= q);
        assert!(!(greater <= q));
        assert!(less.try_le(&q).unwrap());
    }

    #[test]
    fn test_less() {
        let q = Quantity::new(1.23, Unit::Meter);
        let equal = Quantity::new(1.23, Unit::Meter);
        let less = Quantity::new(1.23 - 1e-11, Unit::Meter);
        let greater = Quantity::new(1.23 + 1e-11, Unit::Meter);

        assert!(!(equal < q));
        assert!(less < q);
        assert!(!(greater < q));
        assert!(less.try_lt(&q).unwrap());
    }

    #[test]
    fn test_ordering_is_exact_inside_tolerance_band() {
        let q = Quantity::new(1.23, Unit::Meter);
        let nudged = Quantity::new(1.23 + 1e-13, Unit::Meter);

        assert!(nudged == q);
        assert!(nudged > q);
        assert!(!(nudged <= q));
    }

    #[test]
    fn test_ordering_across_units() {
        let km = Quantity::new(1.0, Unit::Kilometer);
        let mi = Quantity::new(1.0, Unit::Mile);
        assert!(km < mi);
        assert!(mi > km);

        let fast = Quantity::new(5.0, Unit::MinutesPerKilometer);
        let slow = Quantity::new(10.0, Unit::KilometersPerHour);
        assert!(fast.to(Unit::KilometersPerHour).unwrap() > slow);
    }

    #[test]
    fn test_try_cmp() {
        let q = Quantity::new(1.0, Unit::Meter);
        assert_eq!(q.try_cmp(&Quantity::new(999.0, Unit::Millimeter)).unwrap(), Ordering::Greater);
        assert_eq!(q.try_cmp(&Quantity::new(101.0, Unit::Centimeter)).unwrap(), Ordering::Less);
        assert_eq!(q.try_cmp(&Quantity::new(1.0, Unit::Meter)).unwrap(), Ordering::Equal);

        let nan = Quantity::new(f64::NAN, Unit::Meter);
        assert_eq!(nan.try_cmp(&q).unwrap(), Ordering::Equal);
        assert_eq!(nan.partial_cmp(&q), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Quantity::new(1.001, Unit::Radian)).unwrap();
        assert_eq!(json, r#"{"value":1.001,"unit":"Radian"}"#);

        let q: Quantity = serde_json::from_str(&json).unwrap();
        assert_abs_diff_eq!(q.value(), 1.001, epsilon = 1e-12);
        assert_eq!(q.unit(), Unit::Radian);
    }

    #[test]
    fn test_deserialize_rejects_unknown_unit() {
        let result: Result<Quantity, _> = serde_json::from_str(r#"{"value":1.0,"unit":"Furlong"}"#);
        assert!(result.is_err());
    }
}
